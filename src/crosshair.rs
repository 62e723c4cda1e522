//! Crosshair tracking
//!
//! Maps a pointer position on a panel into data space and moves the two guide
//! lines there when the point falls inside the axis ranges.

use crate::error::MapError;
use crate::render::PanelScene;

/// Screen-space to data-space mapping of a drawn panel
pub trait ViewTransform {
    fn screen_to_data(&self, screen: [f32; 2]) -> Result<[f64; 2], MapError>;
}

/// Vertical line at `x`, horizontal line at `y`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub y: f64,
}

/// Pointer position in data coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MousePoint {
    pub x: f64,
    pub y: f64,
}

impl MousePoint {
    /// Inclusive on both ends
    pub fn in_range(&self, x_extent: f64, y_extent: f64) -> bool {
        (0.0..=x_extent).contains(&self.x) && (0.0..=y_extent).contains(&self.y)
    }

    /// Status text, coordinates truncated toward zero
    pub fn readout(&self) -> String {
        format!("X={}, Y={}", self.x.trunc() as i64, self.y.trunc() as i64)
    }
}

/// Track the pointer on `scene`. The caller only forwards moves for the focused panel.
///
/// Out-of-range points are returned but leave the guide lines where they were.
pub fn on_pointer_move(
    scene: &mut PanelScene,
    screen: [f32; 2],
    transform: &dyn ViewTransform,
    x_extent: f64,
    y_extent: f64,
) -> Result<MousePoint, MapError> {
    let crosshair = scene.crosshair.as_mut().ok_or(MapError::NoView)?;

    let [x, y] = transform.screen_to_data(screen)?;
    if !x.is_finite() || !y.is_finite() {
        return Err(MapError::NonFinite);
    }

    let point = MousePoint { x, y };
    if point.in_range(x_extent, y_extent) {
        crosshair.x = x;
        crosshair.y = y;
    }
    Ok(point)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::color::ColorAllocator;
    use crate::render::render;
    use proptest::prelude::*;

    /// 100x100 px frame showing [0, 10] x [0, 10], y axis pointing up
    pub(crate) struct Linear;

    impl ViewTransform for Linear {
        fn screen_to_data(&self, screen: [f32; 2]) -> Result<[f64; 2], MapError> {
            let [sx, sy] = screen;
            if !(0.0..=100.0).contains(&sx) || !(0.0..=100.0).contains(&sy) {
                return Err(MapError::OutsideScene);
            }
            Ok([sx as f64 / 10.0, (100.0 - sy as f64) / 10.0])
        }
    }

    struct Broken;

    impl ViewTransform for Broken {
        fn screen_to_data(&self, _screen: [f32; 2]) -> Result<[f64; 2], MapError> {
            Ok([f64::NAN, 0.0])
        }
    }

    fn drawn_scene() -> PanelScene {
        let mut scene = PanelScene::default();
        render(&mut scene, &[], 10.0, 10.0, &mut ColorAllocator::seeded(0));
        scene
    }

    #[test]
    fn test_in_range_moves_guides() {
        let mut scene = drawn_scene();
        let point = on_pointer_move(&mut scene, [25.0, 60.0], &Linear, 10.0, 10.0).unwrap();
        assert_eq!(point, MousePoint { x: 2.5, y: 4.0 });
        assert_eq!(scene.crosshair, Some(Crosshair { x: 2.5, y: 4.0 }));
    }

    #[test]
    fn test_out_of_range_keeps_last_position() {
        let mut scene = drawn_scene();
        on_pointer_move(&mut scene, [50.0, 50.0], &Linear, 10.0, 10.0).unwrap();

        // [0, 5] x [0, 5] only covers the lower-left quarter
        let point = on_pointer_move(&mut scene, [80.0, 10.0], &Linear, 5.0, 5.0).unwrap();
        assert_eq!(point, MousePoint { x: 8.0, y: 9.0 });
        assert_eq!(scene.crosshair, Some(Crosshair { x: 5.0, y: 5.0 }));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut scene = drawn_scene();
        let origin = on_pointer_move(&mut scene, [0.0, 100.0], &Linear, 10.0, 10.0).unwrap();
        assert!(origin.in_range(10.0, 10.0));
        assert_eq!(scene.crosshair, Some(Crosshair { x: 0.0, y: 0.0 }));

        let corner = on_pointer_move(&mut scene, [100.0, 0.0], &Linear, 10.0, 10.0).unwrap();
        assert!(corner.in_range(10.0, 10.0));
        assert_eq!(scene.crosshair, Some(Crosshair { x: 10.0, y: 10.0 }));
    }

    #[test]
    fn test_no_view_before_first_draw() {
        let mut scene = PanelScene::default();
        assert_eq!(
            on_pointer_move(&mut scene, [1.0, 1.0], &Linear, 10.0, 10.0),
            Err(MapError::NoView)
        );
    }

    #[test]
    fn test_mapping_failures_propagate() {
        let mut scene = drawn_scene();
        assert_eq!(
            on_pointer_move(&mut scene, [500.0, 1.0], &Linear, 10.0, 10.0),
            Err(MapError::OutsideScene)
        );
        assert_eq!(
            on_pointer_move(&mut scene, [1.0, 1.0], &Broken, 10.0, 10.0),
            Err(MapError::NonFinite)
        );
        assert_eq!(scene.crosshair, Some(Crosshair::default()));
    }

    #[test]
    fn test_readout_truncates() {
        let point = MousePoint { x: 12.9, y: -0.5 };
        assert_eq!(point.readout(), "X=12, Y=0");
    }

    proptest! {
        #[test]
        fn extents_themselves_are_in_range(x in 0.0f64..1e6, y in 0.0f64..1e6) {
            let origin = MousePoint { x: 0.0, y: 0.0 };
            let corner = MousePoint { x, y };
            prop_assert!(origin.in_range(x, y));
            prop_assert!(corner.in_range(x, y));
        }
    }
}
