use std::num::ParseIntError;

use crate::remap;

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// The 16-color game palette, one row per color: red, green, blue
/// (0-255) and the matching hex code, tab separated. The trailing
/// newline yields an empty final row that the parser drops.
pub const PALETTE_TSV: &str = "7\t7\t8\t070708
51\t34\t34\t332222
119\t68\t51\t774433
204\t136\t85\tcc8855
153\t51\t17\t993311
221\t119\t17\tdd7711
255\t221\t85\tffdd55
255\t255\t51\tffff33
85\t170\t68\t55aa44
17\t85\t34\t115522
68\t238\t187\t44eebb
51\t136\t221\t3388dd
85\t68\t170\t5544aa
85\t85\t119\t555577
170\t187\t187\taabbbb
255\t255\t255\tffffff
";

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("palette row {row}: channel field {field:?} is not an integer in 0..=255")]
    BadChannel {
        row: usize,
        field: String,
        source: ParseIntError,
    },
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RgbRow {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hex code carried alongside the channels in the table. Redundant
    /// with r/g/b and never emitted.
    #[allow(dead_code)]
    pub hex: Option<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq)]
pub struct UnitRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Splits the table into rows. Rows with fewer than 3 tab-separated
/// fields (the trailing blank line included) are dropped; a channel
/// field that does not parse as a `u8` is a defect in the embedded
/// data and fails the whole run.
pub fn parse_rows(table: &str) -> Result<Vec<RgbRow>, PaletteError> {
    table
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx, line.split('\t').collect::<Vec<_>>()))
        .filter(|(_, fields)| fields.len() >= 3)
        .map(|(idx, fields)| {
            let channel = |field: &str| {
                field
                    .parse::<u8>()
                    .map_err(|source| PaletteError::BadChannel {
                        row: idx + 1,
                        field: field.to_owned(),
                        source,
                    })
            };

            Ok(RgbRow {
                r: channel(fields[0])?,
                g: channel(fields[1])?,
                b: channel(fields[2])?,
                hex: fields.get(3).map(|&hex| hex.to_owned()),
            })
        })
        .collect()
}

impl RgbRow {
    pub fn normalized(&self) -> UnitRgb {
        let &Self { r, g, b, .. } = self;

        let r = unit(r);
        let g = unit(g);
        let b = unit(b);

        UnitRgb { r, g, b }
    }
}

fn unit(channel: u8) -> f64 {
    let continuous = remap! {
        value: f64::from(channel),
        from: 0.0, f64::from(u8::MAX),
        to: 0.0, 1.0
    };

    round3(continuous)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl UnitRgb {
    /// GLSL vector literal, trailing comma included, ready to paste
    /// into a `vec3[16]` array initializer.
    pub fn to_vec3(&self) -> String {
        let &Self { r, g, b } = self;

        format!("vec3({}, {}, {}),", fmt_unit(r), fmt_unit(g), fmt_unit(b))
    }
}

// Shortest float rendering, except whole values keep one decimal digit
// (`1.0`, not `1`) so the literal stays a GLSL float.
fn fmt_unit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
