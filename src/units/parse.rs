//! Quantity literals from text.
//!
//! Numeric input fields accept strings like `24in`, `90 deg`, `3.5 m/s^2` or
//! `45 cdeg`. Parsing yields a [`DynQuantity`] whose dimension is only known
//! at runtime; converting it into a typed [`Quantity`] checks the dimension.

use std::fmt;
use std::str::FromStr;

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::{Error, ParseError, QuantityError, SourceContext};

use super::defs;
use super::dimension::{Dimension, DimVector};
use super::temperature::{celsius_to_kelvin, fahrenheit_to_kelvin};
use super::{Angle, Quantity, Real};

#[derive(Parser)]
#[grammar = "quantity.pest"]
struct QuantityParser;

/// A parsed value in SI base units with its dimension vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynQuantity {
    pub value: f64,
    pub dims: DimVector,
}

impl DynQuantity {
    /// Typed view of this value, if the dimensions agree.
    pub fn to_quantity<D: Dimension, N: Real>(self) -> Result<Quantity<D, N>, QuantityError> {
        let expected = D::vector();
        if self.dims != expected {
            return Err(QuantityError::DimensionMismatch {
                expected,
                found: self.dims,
            });
        }
        Ok(Quantity::from_base(N::of(self.value)))
    }
}

impl fmt::Display for DynQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.dims.is_dimensionless() {
            write!(f, " {}", self.dims.suffix())?;
        }
        Ok(())
    }
}

impl<D: Dimension, N: Real> TryFrom<DynQuantity> for Quantity<D, N> {
    type Error = QuantityError;

    fn try_from(value: DynQuantity) -> Result<Self, Self::Error> {
        value.to_quantity()
    }
}

impl<D: Dimension, N: Real> FromStr for Quantity<D, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_quantity(s)?.to_quantity()?)
    }
}

// ============================================================================
// Unit table
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
enum UnitKind {
    /// Scales by `factor`; may be combined and raised to powers.
    Linear,
    /// Offset scales, converted to kelvin.
    Celsius,
    Fahrenheit,
    /// Clockwise-from-north bearing; `factor` is radians per unit.
    Compass,
}

#[derive(Clone, Copy, Debug)]
struct UnitDef {
    kind: UnitKind,
    factor: f64,
    dims: DimVector,
}

impl UnitDef {
    fn linear<D: Dimension>(unit: Quantity<D>) -> Self {
        Self {
            kind: UnitKind::Linear,
            factor: unit.raw(),
            dims: D::vector(),
        }
    }

    fn special<D: Dimension>(kind: UnitKind, unit: Quantity<D>) -> Self {
        Self {
            kind,
            factor: unit.raw(),
            dims: D::vector(),
        }
    }

    fn is_linear(&self) -> bool {
        self.kind == UnitKind::Linear
    }
}

fn lookup(name: &str) -> Option<UnitDef> {
    use defs::*;

    let def = match name {
        "%" | "percent" => UnitDef::linear(PERCENT),

        "m" | "meter" | "meters" | "metre" | "metres" => UnitDef::linear(METER),
        "cm" | "centimeter" | "centimeters" => UnitDef::linear(CENTIMETER),
        "mm" | "millimeter" | "millimeters" => UnitDef::linear(MILLIMETER),
        "km" | "kilometer" | "kilometers" => UnitDef::linear(KILOMETER),
        "in" | "inch" | "inches" => UnitDef::linear(INCH),
        "ft" | "foot" | "feet" => UnitDef::linear(FOOT),
        "yd" | "yard" | "yards" => UnitDef::linear(YARD),
        "tile" | "tiles" => UnitDef::linear(TILE),

        "s" | "sec" | "second" | "seconds" => UnitDef::linear(SECOND),
        "ms" | "msec" | "millisecond" | "milliseconds" => UnitDef::linear(MILLISECOND),
        "min" | "minute" | "minutes" => UnitDef::linear(MINUTE),
        "h" | "hr" | "hour" | "hours" => UnitDef::linear(HOUR),

        "kg" | "kilogram" | "kilograms" => UnitDef::linear(KILOGRAM),
        "g" | "gram" | "grams" => UnitDef::linear(GRAM),
        "lb" | "lbs" | "pound" | "pounds" => UnitDef::linear(POUND),

        "rad" | "radian" | "radians" => UnitDef::linear(RADIAN),
        "deg" | "°" | "degree" | "degrees" => UnitDef::linear(DEGREE),
        "rot" | "rev" | "rotation" | "rotations" => UnitDef::linear(ROTATION),

        "crad" => UnitDef::special(UnitKind::Compass, RADIAN),
        "cdeg" => UnitDef::special(UnitKind::Compass, DEGREE),
        "crot" => UnitDef::special(UnitKind::Compass, ROTATION),

        "A" | "amp" | "ampere" | "amperes" => UnitDef::linear(AMPERE),
        "K" | "kelvin" => UnitDef::linear(KELVIN),
        "degC" | "celsius" => UnitDef::special(UnitKind::Celsius, KELVIN),
        "degF" | "fahrenheit" => UnitDef::special(UnitKind::Fahrenheit, KELVIN),
        "cd" | "candela" => UnitDef::linear(CANDELA),
        "mol" | "mole" | "moles" => UnitDef::linear(MOLE),

        "Hz" | "hertz" => UnitDef::linear(HERTZ),
        "rpm" => UnitDef::linear(ROTATION_PER_MINUTE),
        "rps" => UnitDef::linear(ROTATION_PER_SECOND),
        "mps" => UnitDef::linear(METER_PER_SECOND),
        "ips" => UnitDef::linear(INCH_PER_SECOND),
        "fps" => UnitDef::linear(FOOT_PER_SECOND),

        _ => return None,
    };
    Some(def)
}

/// Best guess for a misspelled unit name.
fn suggest(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    if lower != name && lookup(&lower).is_some() {
        return Some(format!("did you mean `{lower}`?"));
    }
    let trimmed = name.trim_end_matches('s');
    if trimmed != name && !trimmed.is_empty() && lookup(trimmed).is_some() {
        return Some(format!("did you mean `{trimmed}`?"));
    }
    None
}

// ============================================================================
// Parsing
// ============================================================================

/// One factor of a unit expression, e.g. the `s^-2` of `m/s^2`.
struct UnitTerm<'a> {
    name: &'a str,
    def: UnitDef,
    power: i32,
    explicit_power: bool,
    position: usize,
    span: (usize, usize),
}

/// Parse a number with an optional unit expression.
///
/// ```
/// use fieldcurve::units::{Length, parse_quantity};
///
/// let q = parse_quantity("24 in").unwrap();
/// let l: Length = q.to_quantity().unwrap();
/// assert!((l.to_tiles() - 1.0).abs() < 1e-12);
/// ```
pub fn parse_quantity(input: &str) -> Result<DynQuantity, ParseError> {
    let ctx = SourceContext::new("<input>", input);

    let mut pairs = QuantityParser::parse(Rule::quantity, input)
        .map_err(|e| syntax_error(&ctx, e))?;
    let Some(quantity) = pairs.next() else {
        return Err(ParseError::Syntax {
            message: "empty input".to_string(),
            src: ctx.named_source(),
            span: (0, input.len()).into(),
        });
    };

    let mut value = None;
    let mut terms = Vec::new();
    for inner in quantity.into_inner() {
        match inner.as_rule() {
            Rule::number => value = Some(parse_number(&ctx, &inner)?),
            Rule::unit_expr => terms = parse_unit_expr(&ctx, inner)?,
            _ => {}
        }
    }
    let Some(value) = value else {
        return Err(ParseError::Syntax {
            message: "expected number".to_string(),
            src: ctx.named_source(),
            span: (0, input.len()).into(),
        });
    };

    if let Some(special) = terms.iter().find(|t| !t.def.is_linear()) {
        let alone =
            terms.len() == 1 && special.position == 0 && !special.explicit_power && special.power == 1;
        if !alone {
            return Err(ParseError::StandaloneUnit {
                unit: special.name.to_string(),
                src: ctx.named_source(),
                span: special.span.into(),
            });
        }
        return Ok(apply_special(value, &special.def));
    }

    let mut factor = 1.0;
    let mut dims = DimVector::DIMENSIONLESS;
    for term in &terms {
        factor *= term.def.factor.powi(term.power);
        dims = dims
            .combine(term.def.dims, term.power)
            .ok_or_else(|| ParseError::InvalidNumber {
                message: "unit exponent out of range".to_string(),
                src: ctx.named_source(),
                span: term.span.into(),
            })?;
    }

    let value = value * factor;
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            message: "value out of range after unit conversion".to_string(),
            src: ctx.named_source(),
            span: (0, input.len()).into(),
        });
    }

    Ok(DynQuantity { value, dims })
}

fn apply_special(value: f64, def: &UnitDef) -> DynQuantity {
    let value = match def.kind {
        UnitKind::Celsius => celsius_to_kelvin(value),
        UnitKind::Fahrenheit => fahrenheit_to_kelvin(value),
        UnitKind::Compass => Angle::from_compass_radians(value * def.factor).raw(),
        UnitKind::Linear => value * def.factor,
    };
    DynQuantity {
        value,
        dims: def.dims,
    }
}

fn parse_number(ctx: &SourceContext, pair: &Pair<Rule>) -> Result<f64, ParseError> {
    let text = pair.as_str();
    let invalid = |message: String| ParseError::InvalidNumber {
        message,
        src: ctx.named_source(),
        span: span_of(pair).into(),
    };

    let value: f64 = text.parse().map_err(|e| invalid(format!("{e}")))?;
    if !value.is_finite() {
        return Err(invalid(format!("`{text}` is out of range")));
    }
    Ok(value)
}

fn parse_unit_expr<'a>(
    ctx: &SourceContext,
    pair: Pair<'a, Rule>,
) -> Result<Vec<UnitTerm<'a>>, ParseError> {
    let mut terms = Vec::new();
    let mut sign = 1;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::unit_op => sign = if inner.as_str() == "/" { -1 } else { 1 },
            Rule::unit_term => {
                let position = terms.len();
                terms.push(parse_unit_term(ctx, inner, sign, position)?);
            }
            _ => {}
        }
    }
    Ok(terms)
}

fn parse_unit_term<'a>(
    ctx: &SourceContext,
    pair: Pair<'a, Rule>,
    sign: i32,
    position: usize,
) -> Result<UnitTerm<'a>, ParseError> {
    let span = span_of(&pair);
    let mut name = "";
    let mut name_span = span;
    let mut exponent = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::unit_name => {
                name = inner.as_str();
                name_span = span_of(&inner);
            }
            Rule::exponent => {
                let parsed: i32 = inner.as_str().parse().map_err(|e| ParseError::InvalidNumber {
                    message: format!("exponent: {e}"),
                    src: ctx.named_source(),
                    span: span_of(&inner).into(),
                })?;
                exponent = Some(parsed);
            }
            _ => {}
        }
    }

    let def = lookup(name).ok_or_else(|| ParseError::UnknownUnit {
        unit: name.to_string(),
        src: ctx.named_source(),
        span: name_span.into(),
        suggestion: suggest(name),
    })?;

    let power = exponent
        .unwrap_or(1)
        .checked_mul(sign)
        .ok_or_else(|| ParseError::InvalidNumber {
            message: "exponent out of range".to_string(),
            src: ctx.named_source(),
            span: span.into(),
        })?;

    Ok(UnitTerm {
        name,
        def,
        power,
        explicit_power: exponent.is_some(),
        position,
        span,
    })
}

fn span_of(pair: &Pair<Rule>) -> (usize, usize) {
    let span = pair.as_span();
    (span.start(), span.end() - span.start())
}

fn syntax_error(ctx: &SourceContext, err: pest::error::Error<Rule>) -> ParseError {
    use pest::error::InputLocation;

    let span = match err.location {
        InputLocation::Pos(pos) => (pos, 0),
        InputLocation::Span((start, end)) => (start, end - start),
    };
    let err = err.renamed_rules(|rule| {
        match rule {
            Rule::number => "number",
            Rule::unit_expr | Rule::unit_term | Rule::unit_name => "unit",
            Rule::unit_op => "`*` or `/`",
            Rule::exponent => "exponent",
            Rule::EOI => "end of input",
            _ => "quantity",
        }
        .to_string()
    });

    ParseError::Syntax {
        message: err.variant.message().into_owned(),
        src: ctx.named_source(),
        span: span.into(),
    }
}
