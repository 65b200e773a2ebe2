//! # Box Parameters
//!
//! Dimensions of a marker box, in millimetres.
//!
//! ```text
//!        ◀──────────── side ────────────▶
//!        ┌──────────────────────────────┐   ▲
//!        │ margin                       │   │
//!        │   ┌──────────────────────┐   │   │
//!        │   │  marker (side - 2m)  │   │ side
//!        │   └──────────────────────┘   │   │
//!        │                              │   │
//!        └──────────────────────────────┘   ▼
//! ```

use config::constants::BoxPreset;
use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Dimensions of a marker box.
///
/// ## Example
///
/// ```rust
/// use config::constants::BATCH_PRESET;
/// use marker_box::BoxParams;
///
/// let params = BoxParams::from(BATCH_PRESET);
/// params.validate().unwrap();
/// assert_eq!(params.marker_side(), 70.0);
/// assert_eq!(params.magnet_offset(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    /// Total side length (marker + margins).
    pub side: f64,
    /// Total thickness.
    pub thickness: f64,
    /// Width of the white frame around the marker.
    pub margin: f64,
    /// Depth of the marker relief.
    pub groove_depth: f64,
    /// Radius of the four magnet insets on the bottom, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnet_inset_radius: Option<f64>,
    /// Printer layer height; depth of the bottom engravings.
    pub layer_height: f64,
}

impl From<BoxPreset> for BoxParams {
    fn from(preset: BoxPreset) -> Self {
        Self {
            side: preset.side,
            thickness: preset.thickness,
            margin: preset.margin,
            groove_depth: preset.groove_depth,
            magnet_inset_radius: preset.magnet_inset_radius,
            layer_height: preset.layer_height,
        }
    }
}

impl BoxParams {
    /// Check that the dimensions describe a printable box.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let mut named = vec![
            ("box_side", self.side),
            ("box_thickness", self.thickness),
            ("marker_margin", self.margin),
            ("marker_groove_depth", self.groove_depth),
            ("layer_height", self.layer_height),
        ];
        if let Some(radius) = self.magnet_inset_radius {
            named.push(("magnet_inset_radius", radius));
        }
        if let Some(&(name, value)) = named.iter().find(|(_, value)| !(value.is_finite() && *value > 0.0)) {
            return Err(ParamsError::NotPositive { name, value });
        }

        if self.margin >= self.side / 2.0 {
            return Err(ParamsError::MarginTooLarge {
                margin: self.margin,
                side: self.side,
            });
        }
        if self.groove_depth >= self.thickness {
            return Err(ParamsError::GrooveTooDeep {
                groove_depth: self.groove_depth,
                thickness: self.thickness,
            });
        }
        if self.layer_height >= self.thickness {
            return Err(ParamsError::LayerTooThick {
                layer_height: self.layer_height,
                thickness: self.thickness,
            });
        }
        Ok(())
    }

    /// Side of the marker area inside the margins.
    #[inline]
    pub fn marker_side(&self) -> f64 {
        self.side - 2.0 * self.margin
    }

    /// Distance from the centre to the middle of the margin along each axis;
    /// magnet insets and engravings sit on this line.
    #[inline]
    pub fn magnet_offset(&self) -> f64 {
        self.side / 2.0 - self.margin / 2.0
    }

    /// Height of the bottom face.
    #[inline]
    pub fn bottom_z(&self) -> f64 {
        -(self.thickness - self.groove_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{BATCH_PRESET, DEFAULT_ID_PRESET};

    fn params() -> BoxParams {
        BoxParams::from(DEFAULT_ID_PRESET)
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(BoxParams::from(DEFAULT_ID_PRESET).validate().is_ok());
        assert!(BoxParams::from(BATCH_PRESET).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let bad = BoxParams { side: 0.0, ..params() };
        assert_eq!(
            bad.validate(),
            Err(ParamsError::NotPositive { name: "box_side", value: 0.0 })
        );
        let bad = BoxParams { layer_height: -0.2, ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::NotPositive { name: "layer_height", .. })));
        let bad = BoxParams { magnet_inset_radius: Some(0.0), ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::NotPositive { name: "magnet_inset_radius", .. })));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let bad = BoxParams { thickness: f64::NAN, ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::NotPositive { name: "box_thickness", .. })));
    }

    #[test]
    fn test_validate_margin_bound() {
        let bad = BoxParams { margin: 45.0, ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::MarginTooLarge { .. })));
        let ok = BoxParams { margin: 44.9, ..params() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_depths() {
        let bad = BoxParams { groove_depth: 1.0, ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::GrooveTooDeep { .. })));
        let bad = BoxParams { layer_height: 1.5, ..params() };
        assert!(matches!(bad.validate(), Err(ParamsError::LayerTooThick { .. })));
    }

    #[test]
    fn test_derived_dimensions() {
        let p = params();
        assert_eq!(p.marker_side(), 70.0);
        assert_eq!(p.magnet_offset(), 40.0);
        assert!((p.bottom_z() + 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_serde_round_trip_omits_missing_magnets() {
        let json = serde_json::to_string(&params()).unwrap();
        assert!(!json.contains("magnet_inset_radius"));
        let back: BoxParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params());
    }
}
