//! Conversions from external infrastructure errors into domain errors.

use buildingx_domain::BuildingXError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BuildingXError);

impl From<InfraError> for BuildingXError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BuildingXError> for InfraError {
    fn from(value: BuildingXError) -> Self {
        InfraError(value)
    }
}

trait IntoBuildingXError {
    fn into_buildingx(self) -> BuildingXError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BuildingXError */
/* -------------------------------------------------------------------------- */

impl IntoBuildingXError for HttpError {
    fn into_buildingx(self) -> BuildingXError {
        if self.is_timeout() {
            return BuildingXError::Transport("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return BuildingXError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return BuildingXError::Config(format!("invalid HTTP request: {self}"));
        }

        BuildingXError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_buildingx())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → BuildingXError */
/* -------------------------------------------------------------------------- */

impl IntoBuildingXError for UrlError {
    fn into_buildingx(self) -> BuildingXError {
        BuildingXError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_buildingx())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
