//! Declaration parsing using the `cssparser` crate.
//!
//! Tab styles arrive as CSS-like declaration blocks (`width: 25%; padding: 4px`)
//! and colors as single CSS color values. Only sizing properties are
//! interpreted; other declarations are skipped so that a host can share one
//! style string between the engine and its own renderer.

use cssparser::{
    BasicParseError, Delimiter, ParseError as CssParseError, Parser, ParserInput, SourceLocation,
    Token,
};
use tabstrip_render::Color;

use crate::types::{LengthValue, TabStyle};
use crate::{Error, Result};

/// Sizing properties that affect tab layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizingProperty {
    Width,
    MaxWidth,
}

impl SizingProperty {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "max-width" | "maxwidth" => Some(Self::MaxWidth),
            _ => None,
        }
    }
}

/// Parse a declaration block into a [`TabStyle`].
///
/// Unknown properties are skipped. A malformed declaration or an invalid
/// sizing value is an error, reported with the offending property.
///
/// # Example
///
/// ```
/// use tabstrip_style::parser::parse_tab_style;
/// use tabstrip_style::prelude::LengthValue;
///
/// let style = parse_tab_style("padding: 4px; width: 96px").unwrap();
/// assert_eq!(style.width, Some(LengthValue::Px(96.0)));
/// assert_eq!(style.max_width, None);
/// ```
pub fn parse_tab_style(css: &str) -> Result<TabStyle> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut style = TabStyle::default();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Stray separators are harmless
        if parser.try_parse(|p| p.expect_semicolon()).is_ok() {
            continue;
        }

        let name = parser
            .expect_ident_cloned()
            .map_err(syntax_error)?
            .to_ascii_lowercase();
        parser.expect_colon().map_err(syntax_error)?;

        let Some(property) = SizingProperty::from_name(&name) else {
            tracing::debug!("Ignoring tab style property: {}", name);
            let _ = parser.parse_until_after(Delimiter::Semicolon, |p| {
                while p.next().is_ok() {}
                Ok::<_, CssParseError<'_, ()>>(())
            });
            continue;
        };

        let length = parser
            .parse_until_after(Delimiter::Semicolon, length_value)
            .map_err(|_| Error::invalid_value(&name, "expected a length, percentage or 'auto'"))?;

        match property {
            SizingProperty::Width => style.width = Some(length),
            SizingProperty::MaxWidth => style.max_width = Some(length),
        }
    }

    Ok(style)
}

/// Parse a single CSS color value.
///
/// Supports hex (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`), a small set of
/// named colors including `transparent`, and `rgb()`/`rgba()`.
pub fn parse_color(value: &str) -> Result<Color> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(color_value)
        .map_err(|_| Error::invalid_value("color", format!("unrecognized color '{}'", value.trim())))
}

/// Parse a single length value.
pub fn parse_length(value: &str) -> Result<LengthValue> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(length_value)
        .map_err(|_| Error::invalid_value("length", format!("unrecognized length '{}'", value.trim())))
}

fn syntax_error(e: BasicParseError<'_>) -> Error {
    let SourceLocation { line, column } = e.location;
    // cssparser lines are 0-indexed
    Error::parse(format!("{:?}", e.kind), line + 1, column)
}

/// Parse a length value. Unitless numbers are pixels.
fn length_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<LengthValue, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    #[allow(clippy::redundant_guards)] // `0` is zero length regardless of unit
    match token.clone() {
        Token::Number { value, .. } if value == 0.0 => Ok(LengthValue::Zero),
        Token::Number { value, .. } => Ok(LengthValue::Px(value)),
        Token::Dimension { value, unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Ok(LengthValue::Px(value))
        }
        Token::Percentage { unit_value, .. } => Ok(LengthValue::Percent(unit_value * 100.0)),
        Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(LengthValue::Auto),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a color value.
fn color_value<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<Color, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?;

    match token.clone() {
        Token::Hash(hash) | Token::IDHash(hash) => {
            let hex_str = format!("#{}", hash);
            Color::from_hex(&hex_str).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => match name.as_ref().to_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "gray" | "grey" => Ok(Color::GRAY),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            // rgb(r, g, b) or rgba(r, g, b, a)
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = color_component(p)?;
                p.expect_comma()?;
                let g = color_component(p)?;
                p.expect_comma()?;
                let b = color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    alpha_component(p)?
                } else {
                    1.0
                };
                Ok::<_, CssParseError<'_, ()>>((r, g, b, a))
            })?;
            Ok(Color::new(r, g, b, a))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn color_component<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok((value / 255.0).clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}

fn alpha_component<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}
