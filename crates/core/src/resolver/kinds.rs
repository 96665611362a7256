//! Resolution descriptors for locations, devices and points

use buildingx_domain::constants::{UNKNOWN_STATUS, WRITABLE_MARKER};
use buildingx_domain::{Device, EntityKind, Location, Point};
use chrono::{DateTime, Utc};

use super::descriptor::{Contribution, Discriminator, Link, Resolvable};
use super::document::{Attributes, PrimaryRecord};

// ============================================================================
// Location
// ============================================================================

impl Resolvable for Location {
    const KIND: EntityKind = EntityKind::Location;
    const LINK: Link = Link::Forward("hasPostalAddress");
    // The relationship pins the address record by id and type.
    const CONTRIBUTIONS: &'static [Contribution<Self>] =
        &[Contribution { discriminator: Discriminator::Any, apply: apply_postal_address }];

    fn seed(record: &PrimaryRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.attributes.text("label"),
            description: record.attributes.text("description"),
            time_zone: record.attributes.text("timeZone"),
            ..Self::default()
        }
    }
}

fn apply_postal_address(location: &mut Location, address: &Attributes) {
    location.street = address.text("street");
    location.city = address.text("locality");
    location.postal_code = address.text("postalCode");
    location.country = address.text("countryCode");
}

// ============================================================================
// Device
// ============================================================================

impl Resolvable for Device {
    const KIND: EntityKind = EntityKind::Device;
    const LINK: Link = Link::Inverse("hasDevice");
    const CONTRIBUTIONS: &'static [Contribution<Self>] = &[
        Contribution { discriminator: Discriminator::Named("DeviceInfo"), apply: apply_device_info },
        Contribution {
            discriminator: Discriminator::Named("Connectivity"),
            apply: apply_connectivity,
        },
    ];

    fn seed(record: &PrimaryRecord) -> Self {
        Self {
            id: record.id.clone(),
            model: record.attributes.text("modelName"),
            serial: record.attributes.text("serialNumber"),
            ..Self::default()
        }
    }

    fn finalize(&mut self) {
        if self.online_status.is_empty() {
            self.online_status = UNKNOWN_STATUS.to_string();
        }
    }
}

fn apply_device_info(device: &mut Device, info: &Attributes) {
    device.name = info.text("name");
    device.description = info.text("description");
}

fn apply_connectivity(device: &mut Device, connectivity: &Attributes) {
    device.online_status = connectivity.text("status");
}

// ============================================================================
// Point
// ============================================================================

impl Resolvable for Point {
    const KIND: EntityKind = EntityKind::Point;
    const LINK: Link = Link::Unlinked;
    const CONTRIBUTIONS: &'static [Contribution<Self>] = &[];

    fn seed(record: &PrimaryRecord) -> Self {
        let attributes = &record.attributes;
        let timestamp = attributes.nested_text(&["pointValue", "timestamp"]);

        Self {
            id: record.id.clone(),
            name: attributes.text("name"),
            description: attributes.nested_text(&["systemAttributes", "description"]),
            data_type: attributes.text("dataType"),
            writable: attributes.nested_text(&["systemAttributes", "writable"]) == WRITABLE_MARKER,
            status: attributes.nested_text(&["systemAttributes", "curStatus"]),
            string_value: attributes.nested_text(&["pointValue", "value"]),
            timestamp: parse_timestamp(&timestamp),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw).ok().map(|timestamp| timestamp.with_timezone(&Utc))
}
