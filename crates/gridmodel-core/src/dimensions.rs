//! Width, height, and aspect ratio triples.
//!
//! Any two of the three determine the third, so a [`Dimensions`] is built from
//! a [`DimensionParams`] holding whichever two the caller knows. When all three
//! are supplied, width and height win and the ratio is recomputed from them.

use crate::errors::GeometryError;
use crate::types::Length;
use crate::validation::is_number;

/// The partially known inputs to a [`Dimensions`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionParams {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub aspect_ratio: Option<f64>,
}

impl DimensionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Build params from lengths, resolving percentages against `container`.
    ///
    /// A percent width is relative to the container's width and a percent
    /// height to its height.
    pub fn from_lengths(
        width: Option<Length>,
        height: Option<Length>,
        aspect_ratio: Option<f64>,
        container: Option<&Dimensions>,
    ) -> Result<Self, GeometryError> {
        let width = width
            .map(|w| w.resolve("width", container.map(Dimensions::width)))
            .transpose()?;
        let height = height
            .map(|h| h.resolve("height", container.map(Dimensions::height)))
            .transpose()?;
        Ok(Self {
            width,
            height,
            aspect_ratio,
        })
    }

    /// Number of values that were supplied.
    pub fn supplied(&self) -> usize {
        [self.width, self.height, self.aspect_ratio]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// An immutable width/height/aspect-ratio triple.
///
/// `aspect_ratio == width / height` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Dimensions {
    width: f64,
    height: f64,
    aspect_ratio: f64,
}

impl Dimensions {
    /// Dimensions from a width and a height.
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::from_params(DimensionParams::new().with_width(width).with_height(height))
    }

    pub fn from_width_and_aspect_ratio(width: f64, aspect_ratio: f64) -> Result<Self, GeometryError> {
        Self::from_params(
            DimensionParams::new()
                .with_width(width)
                .with_aspect_ratio(aspect_ratio),
        )
    }

    pub fn from_height_and_aspect_ratio(height: f64, aspect_ratio: f64) -> Result<Self, GeometryError> {
        Self::from_params(
            DimensionParams::new()
                .with_height(height)
                .with_aspect_ratio(aspect_ratio),
        )
    }

    /// Derive the full triple from at least two of its members.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::InvalidParam`] if width or height is not finite, or
    ///   the aspect ratio is not a finite number greater than zero.
    /// - [`GeometryError::IncorrectParamCount`] if fewer than two values are
    ///   supplied.
    pub fn from_params(params: DimensionParams) -> Result<Self, GeometryError> {
        if let Some(width) = params.width.filter(|w| !is_number(*w)) {
            return Err(GeometryError::invalid_param("width", width));
        }
        if let Some(height) = params.height.filter(|h| !is_number(*h)) {
            return Err(GeometryError::invalid_param("height", height));
        }
        if let Some(ratio) = params.aspect_ratio.filter(|r| !is_number(*r) || *r <= 0.0) {
            return Err(GeometryError::invalid_param("aspectRatio", ratio));
        }

        match (params.width, params.height, params.aspect_ratio) {
            (Some(width), Some(height), _) => Ok(Self {
                width,
                height,
                aspect_ratio: width / height,
            }),
            (Some(width), None, Some(aspect_ratio)) => Ok(Self {
                width,
                height: width / aspect_ratio,
                aspect_ratio,
            }),
            (None, Some(height), Some(aspect_ratio)) => Ok(Self {
                width: height * aspect_ratio,
                height,
                aspect_ratio,
            }),
            _ => Err(GeometryError::IncorrectParamCount {
                supplied: params.supplied(),
            }),
        }
    }

    /// Width and height computed from already validated values.
    pub(crate) fn from_validated(width: f64, height: f64) -> Self {
        debug_assert!(is_number(width) && is_number(height));
        Self {
            width,
            height,
            aspect_ratio: width / height,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Compare width and height within an absolute tolerance.
    pub fn approx_eq(&self, other: &Dimensions, tolerance: f64) -> bool {
        (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_params() {
        for params in [
            DimensionParams::new(),
            DimensionParams::new().with_width(100.0),
            DimensionParams::new().with_height(100.0),
            DimensionParams::new().with_aspect_ratio(2.0),
        ] {
            assert!(matches!(
                Dimensions::from_params(params),
                Err(GeometryError::IncorrectParamCount { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Dimensions::new(f64::NAN, 10.0),
            Err(GeometryError::InvalidParam { param: "width", .. })
        ));
        assert!(matches!(
            Dimensions::new(10.0, f64::INFINITY),
            Err(GeometryError::InvalidParam { param: "height", .. })
        ));
        for ratio in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                Dimensions::from_width_and_aspect_ratio(10.0, ratio),
                Err(GeometryError::InvalidParam { param: "aspectRatio", .. })
            ));
        }
    }

    #[test]
    fn test_zero_is_preserved() {
        let dims = Dimensions::new(0.0, 0.0).unwrap();
        assert_eq!(dims.width(), 0.0);
        assert_eq!(dims.height(), 0.0);
        assert_eq!(dims.area(), 0.0);
    }

    #[test]
    fn test_width_and_height_win_over_aspect_ratio() {
        let dims = Dimensions::from_params(
            DimensionParams::new()
                .with_width(100.0)
                .with_height(200.0)
                .with_aspect_ratio(2.0),
        )
        .unwrap();
        assert_eq!(dims.width(), 100.0);
        assert_eq!(dims.height(), 200.0);
        assert_eq!(dims.aspect_ratio(), 0.5);
    }

    #[test]
    fn test_derives_missing_member() {
        let dims = Dimensions::from_height_and_aspect_ratio(200.0, 0.5).unwrap();
        assert_eq!(dims.width(), 100.0);

        let dims = Dimensions::from_width_and_aspect_ratio(100.0, 0.5).unwrap();
        assert_eq!(dims.height(), 200.0);

        let dims = Dimensions::new(100.0, 200.0).unwrap();
        assert_eq!(dims.aspect_ratio(), 0.5);
        assert_eq!(dims.area(), 20000.0);
    }

    #[test]
    fn test_percent_lengths_resolve_against_container() {
        let container = Dimensions::new(400.0, 300.0).unwrap();
        let params = DimensionParams::from_lengths(
            Some(Length::percent(50.0)),
            Some(Length::percent(10.0)),
            None,
            Some(&container),
        )
        .unwrap();
        let dims = Dimensions::from_params(params).unwrap();
        assert!((dims.width() - 200.0).abs() < 0.001);
        assert!((dims.height() - 30.0).abs() < 0.001);

        let err = DimensionParams::from_lengths(Some(Length::percent(50.0)), None, Some(1.0), None)
            .unwrap_err();
        assert_eq!(err, GeometryError::MissingContainer { param: "width" });
    }
}
