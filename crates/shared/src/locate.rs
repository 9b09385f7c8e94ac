use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LocateConfig;
use crate::geo::{format_degrees, Coordinate};

/// Search radius for the geo results page, roughly five miles.
pub const GEO_RADIUS_METERS: u32 = 8000;

/// Where to send the user when their position can't be read.
pub const FALLBACK_PATH: &str = "/geo";

/// Why a position request failed. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("Geolocation is not supported by this browser.")]
    Unsupported,
    #[error("Permission to read your location was denied.")]
    PermissionDenied,
    #[error("Location information is unavailable.")]
    PositionUnavailable,
    #[error("The request to get your location timed out.")]
    Timeout,
    #[error("An unknown error occurred while finding your location.")]
    Unknown,
}

impl LocateError {
    /// Map a `GeolocationPositionError.code` to a failure reason.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocateError::PermissionDenied,
            2 => LocateError::PositionUnavailable,
            3 => LocateError::Timeout,
            _ => LocateError::Unknown,
        }
    }
}

/// Results page to open once the position is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SuccessRoute {
    /// `/geo/<lat>/<lng>/<radius>`, radius in meters.
    Geo { radius: u32 },
    /// `/nearby/<lat>/<lng>`, the backend widens its search until it finds enough plaques.
    Nearby,
}

impl Default for SuccessRoute {
    fn default() -> Self {
        SuccessRoute::Geo {
            radius: GEO_RADIUS_METERS,
        }
    }
}

impl SuccessRoute {
    pub fn path(&self, coord: Coordinate) -> String {
        match self {
            SuccessRoute::Geo { radius } => format!(
                "/geo/{}/{}/{}",
                format_degrees(coord.lat),
                format_degrees(coord.lng),
                radius
            ),
            SuccessRoute::Nearby => format!(
                "/nearby/{}/{}",
                format_degrees(coord.lat),
                format_degrees(coord.lng)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Shown while the browser is working out the position.
    Locating,
    /// Shown when the user refused to share their position.
    PermissionDenied,
}

impl ModalKind {
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalKind::Locating => "locationModal",
            ModalKind::PermissionDenied => "locationFailureModal",
        }
    }
}

/// A user-visible step taken around a position request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    ShowModal(ModalKind),
    CloseModal,
    Navigate(String),
}

/// First step of a locate-me click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateStart {
    /// Apply these effects, then issue the position request.
    Request(Vec<Effect>),
    /// No request is made; these effects are all that happens.
    Finished(Vec<Effect>),
}

/// Decide how a locate-me click begins, given whether the browser can
/// report a position at all.
pub fn start_locate(supported: bool, config: &LocateConfig) -> LocateStart {
    if supported {
        LocateStart::Request(vec![Effect::ShowModal(ModalKind::Locating)])
    } else {
        LocateStart::Finished(plan_outcome(Err(LocateError::Unsupported), config))
    }
}

/// Effects once the position request has settled: the locating modal closes
/// before anything in [`plan_outcome`] runs.
pub fn settle_locate(result: Result<Coordinate, LocateError>, config: &LocateConfig) -> Vec<Effect> {
    let mut effects = vec![Effect::CloseModal];
    effects.extend(plan_outcome(result, config));
    effects
}

/// Decide what the page does with the result of a position request.
/// Effects are meant to be applied in order.
pub fn plan_outcome(result: Result<Coordinate, LocateError>, config: &LocateConfig) -> Vec<Effect> {
    match result {
        Ok(coord) => vec![Effect::Navigate(config.success_route.path(coord))],
        Err(err @ LocateError::Unsupported) => vec![Effect::Alert(err.to_string())],
        Err(LocateError::PermissionDenied) => {
            vec![Effect::ShowModal(ModalKind::PermissionDenied)]
        }
        Err(
            err @ (LocateError::PositionUnavailable | LocateError::Timeout | LocateError::Unknown),
        ) => vec![
            Effect::Alert(err.to_string()),
            Effect::Navigate(config.fallback_path.clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigations(effects: &[Effect]) -> Vec<&str> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Navigate(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }

    fn alerts(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Alert(_)))
            .count()
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LocateError::from_code(1), LocateError::PermissionDenied);
        assert_eq!(LocateError::from_code(2), LocateError::PositionUnavailable);
        assert_eq!(LocateError::from_code(3), LocateError::Timeout);
        assert_eq!(LocateError::from_code(0), LocateError::Unknown);
        assert_eq!(LocateError::from_code(42), LocateError::Unknown);
    }

    #[test]
    fn test_geo_path() {
        let path = SuccessRoute::default().path(Coordinate::new(43.65, -79.38));
        assert_eq!(path, "/geo/43.65/-79.38/8000");
    }

    #[test]
    fn test_nearby_path() {
        let path = SuccessRoute::Nearby.path(Coordinate::new(-33.5, 151.0));
        assert_eq!(path, "/nearby/-33.5/151");
    }

    #[test]
    fn test_unsupported_alerts_once_without_navigation() {
        let effects = plan_outcome(Err(LocateError::Unsupported), &LocateConfig::default());
        assert_eq!(
            effects,
            vec![Effect::Alert(
                "Geolocation is not supported by this browser.".to_string()
            )]
        );
    }

    #[test]
    fn test_success_navigates_with_coordinates() {
        let effects = plan_outcome(Ok(Coordinate::new(12.25, 7.5)), &LocateConfig::default());
        assert_eq!(alerts(&effects), 0);
        let paths = navigations(&effects);
        assert_eq!(paths.len(), 1);
        assert!(paths[0].contains("12.25"));
        assert!(paths[0].contains("7.5"));
    }

    #[test]
    fn test_success_uses_configured_route() {
        let config = LocateConfig {
            success_route: SuccessRoute::Nearby,
            ..LocateConfig::default()
        };
        let effects = plan_outcome(Ok(Coordinate::new(1.0, 2.0)), &config);
        assert_eq!(effects, vec![Effect::Navigate("/nearby/1/2".to_string())]);
    }

    #[test]
    fn test_permission_denied_shows_modal_only() {
        let effects = plan_outcome(Err(LocateError::PermissionDenied), &LocateConfig::default());
        assert_eq!(effects, vec![Effect::ShowModal(ModalKind::PermissionDenied)]);
    }

    #[test]
    fn test_recoverable_failures_alert_then_fall_back() {
        for err in [
            LocateError::Timeout,
            LocateError::PositionUnavailable,
            LocateError::Unknown,
        ] {
            let effects = plan_outcome(Err(err), &LocateConfig::default());
            assert_eq!(effects.len(), 2, "{err:?}");
            assert_eq!(effects[0], Effect::Alert(err.to_string()));
            assert_eq!(effects[1], Effect::Navigate(FALLBACK_PATH.to_string()));
        }
    }

    fn modal_after(effects: &[Effect], mut modal: Option<ModalKind>) -> Option<ModalKind> {
        for effect in effects {
            match effect {
                Effect::ShowModal(kind) => modal = Some(*kind),
                Effect::CloseModal => modal = None,
                Effect::Alert(_) | Effect::Navigate(_) => {}
            }
        }
        modal
    }

    #[test]
    fn test_start_shows_locating_modal_before_request() {
        let start = start_locate(true, &LocateConfig::default());
        assert_eq!(
            start,
            LocateStart::Request(vec![Effect::ShowModal(ModalKind::Locating)])
        );
    }

    #[test]
    fn test_start_without_support_never_requests() {
        match start_locate(false, &LocateConfig::default()) {
            LocateStart::Finished(effects) => {
                assert_eq!(alerts(&effects), 1);
                assert!(navigations(&effects).is_empty());
                assert_eq!(modal_after(&effects, None), None);
            }
            LocateStart::Request(_) => panic!("unsupported browser must not request"),
        }
    }

    #[test]
    fn test_settle_closes_locating_modal_first() {
        let config = LocateConfig::default();
        for result in [
            Ok(Coordinate::new(1.0, 2.0)),
            Err(LocateError::Timeout),
            Err(LocateError::PermissionDenied),
        ] {
            let effects = settle_locate(result, &config);
            assert_eq!(effects[0], Effect::CloseModal);
            assert_eq!(&effects[1..], plan_outcome(result, &config).as_slice());
        }
    }

    #[test]
    fn test_modal_sequence_for_each_outcome() {
        let config = LocateConfig::default();
        let LocateStart::Request(before) = start_locate(true, &config) else {
            panic!("supported browser must request");
        };
        let pending = modal_after(&before, None);
        assert_eq!(pending, Some(ModalKind::Locating));

        let denied = settle_locate(Err(LocateError::PermissionDenied), &config);
        assert_eq!(modal_after(&denied, pending), Some(ModalKind::PermissionDenied));

        let found = settle_locate(Ok(Coordinate::new(5.0, 6.0)), &config);
        assert_eq!(modal_after(&found, pending), None);

        // The alert comes after the modal has gone.
        let timed_out = settle_locate(Err(LocateError::Timeout), &config);
        let alert_at = timed_out
            .iter()
            .position(|e| matches!(e, Effect::Alert(_)))
            .unwrap();
        let close_at = timed_out
            .iter()
            .position(|e| *e == Effect::CloseModal)
            .unwrap();
        assert!(close_at < alert_at);
    }

    #[test]
    fn test_geo_path_formats_like_field_text() {
        let path = SuccessRoute::default().path(Coordinate::new(-0.0, 1e-7));
        assert_eq!(path, "/geo/0/1e-7/8000");
    }

    #[test]
    fn test_modal_element_ids_differ() {
        assert_ne!(
            ModalKind::Locating.element_id(),
            ModalKind::PermissionDenied.element_id()
        );
    }
}
