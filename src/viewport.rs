//! Globe-to-map overlay gating.
//!
//! Translates the continuous camera-distance signal from the 3D globe into a
//! discrete "overlay visible / hidden" decision plus a center coordinate.
//! The show threshold (7.5) sits below the hide threshold (8.0) so the
//! overlay does not flicker while the camera hovers near the boundary.
//!
//! A second, map-driven trigger dismisses the overlay when the 2D map itself
//! zooms out to world view (zoom <= 3), independent of camera distance.

use crate::config::{WORLD_VIEW_MAX_ZOOM, ZOOM_IN_THRESHOLD, ZOOM_OUT_THRESHOLD};
use crate::models::GeoPoint;

/// The point a 3D orbit camera circles around.
///
/// The x/y components double as a normalized geographic coordinate: the host
/// pans the orbit target across the globe surface and the gate remaps it to
/// latitude/longitude when the overlay opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTarget {
    /// Normalized east/west component (-1.0..=1.0)
    pub x: f64,
    /// Normalized north/south component (-1.0..=1.0)
    pub y: f64,
    /// Depth component; unused by the gate but part of the camera signal
    pub z: f64,
}

/// Snapshot of the 3D camera, emitted continuously during orbit/zoom
/// interaction. `distance` must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Distance from the orbit target to the camera
    pub distance: f64,
    /// The point the camera orbits around
    pub target: OrbitTarget,
}

/// Visibility of the 2D map overlay.
///
/// A single tagged value rather than independent booleans: either the overlay
/// is hidden, or it is visible at a known center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayState {
    /// Overlay hidden; the globe is interactive.
    Hidden,
    /// Overlay visible, centered on `center`.
    Visible {
        /// Geographic center the map opened at
        center: GeoPoint,
    },
}

/// Decides when the 2D map overlay is shown over the globe.
///
/// Pure state machine over `(current visibility, camera distance)`; the
/// caller owns actually mounting and unmounting the overlay.
#[derive(Debug)]
pub struct ViewportGate {
    state: OverlayState,
}

impl ViewportGate {
    /// Creates a gate with the overlay hidden.
    pub fn new() -> Self {
        ViewportGate {
            state: OverlayState::Hidden,
        }
    }

    /// Current overlay state.
    pub fn overlay(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is currently visible.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible { .. })
    }

    /// Center coordinate of the visible overlay, if any.
    pub fn center(&self) -> Option<GeoPoint> {
        match self.state {
            OverlayState::Visible { center } => Some(center),
            OverlayState::Hidden => None,
        }
    }

    /// Feeds a camera change into the gate. Returns `true` if the overlay
    /// state changed.
    ///
    /// Hidden + `distance <= 7.5` reveals the overlay centered on the orbit
    /// target; visible + `distance > 8.0` hides it. Distances inside the
    /// hysteresis band leave the state untouched.
    pub fn on_camera_change(&mut self, camera: &CameraState) -> bool {
        match self.state {
            OverlayState::Hidden if camera.distance <= ZOOM_IN_THRESHOLD => {
                // Linear remap of the normalized orbit target, not a true
                // sphere-to-lat/lon projection. The globe host depends on
                // this exact formula.
                let center = GeoPoint {
                    lat: camera.target.y * 90.0,
                    lon: camera.target.x * 180.0,
                };
                log::debug!(
                    "camera distance {:.2} within show threshold, opening map at {:.2},{:.2}",
                    camera.distance,
                    center.lat,
                    center.lon
                );
                self.state = OverlayState::Visible { center };
                true
            }
            OverlayState::Visible { .. } if camera.distance > ZOOM_OUT_THRESHOLD => {
                log::debug!(
                    "camera distance {:.2} beyond hide threshold, closing map",
                    camera.distance
                );
                self.state = OverlayState::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Feeds a map zoom-end event into the gate. Returns `true` if the
    /// overlay was dismissed.
    ///
    /// When the visible map zooms out to world view (zoom <= 3) the overlay
    /// closes regardless of camera distance.
    pub fn on_map_zoom_end(&mut self, zoom: f64) -> bool {
        if self.is_visible() && zoom <= WORLD_VIEW_MAX_ZOOM {
            log::debug!("map zoomed out to world view (zoom {zoom:.1}), closing map");
            self.state = OverlayState::Hidden;
            return true;
        }
        false
    }
}

impl Default for ViewportGate {
    fn default() -> Self {
        Self::new()
    }
}
