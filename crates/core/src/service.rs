//! Domain query operations

use std::sync::Arc;

use buildingx_domain::{ApiRequest, BuildingXError, Device, Location, Point, PointHistory, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, instrument, warn};

use crate::ports::{RestExecutor, TokenProvider};
use crate::query;
use crate::resolver::{decode_history, resolve_collection, resolve_single, Resolvable};
use crate::session::Session;

/// BuildingX query service
///
/// Owns the [`Session`] and issues exactly one request per operation. Every
/// operation fails with
/// [`BuildingXError::SessionNotInitialized`](buildingx_domain::BuildingXError::SessionNotInitialized)
/// without touching the network until [`BuildingXService::initialize`] has
/// succeeded.
pub struct BuildingXService {
    session: Session,
    executor: Arc<dyn RestExecutor>,
}

impl BuildingXService {
    /// Create a new service with an uninitialized session
    pub fn new(tokens: Arc<dyn TokenProvider>, executor: Arc<dyn RestExecutor>) -> Self {
        Self { session: Session::new(tokens), executor }
    }

    /// Acquire a token and bind the session to `partition`.
    ///
    /// On failure the session is left uninitialized.
    pub async fn initialize(&mut self, partition: &str) -> Result<()> {
        self.session.initialize(partition).await
    }

    pub fn invalidate(&mut self) {
        self.session.invalidate();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// All buildings of the partition with their postal addresses.
    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> Result<Vec<Location>> {
        self.fetch_collection(query::locations()).await
    }

    #[instrument(skip(self))]
    pub async fn get_location(&self, id: &str) -> Result<Location> {
        self.fetch_single(query::location(id)).await
    }

    #[instrument(skip(self))]
    pub async fn list_devices_by_location(&self, location_id: &str) -> Result<Vec<Device>> {
        self.fetch_collection(query::devices_by_location(location_id)).await
    }

    /// Devices connected below a gateway. The API does not return
    /// connectivity here, so `online_status` is always the sentinel.
    #[instrument(skip(self))]
    pub async fn list_devices_by_gateway(&self, gateway_id: &str) -> Result<Vec<Device>> {
        self.fetch_collection(query::devices_by_gateway(gateway_id)).await
    }

    #[instrument(skip(self))]
    pub async fn list_all_devices(&self) -> Result<Vec<Device>> {
        self.fetch_collection(query::all_devices()).await
    }

    #[instrument(skip(self))]
    pub async fn get_device(&self, id: &str) -> Result<Device> {
        self.fetch_single(query::device(id)).await
    }

    #[instrument(skip(self))]
    pub async fn list_points_by_device(&self, device_id: &str) -> Result<Vec<Point>> {
        self.fetch_collection(query::points_by_device(device_id)).await
    }

    #[instrument(skip(self))]
    pub async fn get_point(&self, id: &str) -> Result<Point> {
        self.fetch_single(query::point(id)).await
    }

    /// Recorded values of a point between `start` and `end`, in the order the
    /// API returns them. `start <= end` is not checked.
    #[instrument(skip(self, start, end), fields(start = %start, end = %end))]
    pub async fn get_point_history(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PointHistory>> {
        let payload = self.fetch(query::point_history(id, start, end)).await?;
        decode_history(&payload).inspect_err(log_failure)
    }

    async fn fetch_collection<E: Resolvable>(&self, path: String) -> Result<Vec<E>> {
        let payload = self.fetch(path).await?;
        let entities = resolve_collection::<E>(&payload).inspect_err(log_failure)?;
        debug!(kind = %E::KIND, count = entities.len(), "resolved collection");
        Ok(entities)
    }

    async fn fetch_single<E: Resolvable>(&self, path: String) -> Result<E> {
        let payload = self.fetch(path).await?;
        resolve_single::<E>(&payload).inspect_err(log_failure)
    }

    async fn fetch(&self, path: String) -> Result<Vec<u8>> {
        let (partition, token) = self.session.credentials().inspect_err(log_failure)?;
        let request = ApiRequest::get(partition, token.secret(), path);

        debug!(path = %request.path, verb = %request.verb, "issuing request");
        self.executor.execute(request).await.inspect_err(log_failure)
    }
}

fn log_failure(err: &BuildingXError) {
    warn!(error = err.label(), message = %err, "operation failed");
}

impl std::fmt::Debug for BuildingXService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildingXService").field("session", &self.session).finish_non_exhaustive()
    }
}
