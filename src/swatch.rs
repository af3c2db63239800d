// SPDX-License-Identifier: MIT
//
// Terminal swatches.
//
// Draws colors as 24-bit background blocks with readable text on top. Text
// color comes from the contrast evaluator: light or dark, primary or muted.
// When color is disabled (not a TTY, NO_COLOR, --plain) the same layout is
// written without escape sequences so the output still reads as a table.

use std::io::{self, Write};

use huekit_color::HexColor;
use huekit_palette::{Palette, PaletteColor, ShadeRamp, TextTone, contrast_ratio};

// ─── Escape sequences ────────────────────────────────────────────────────────

/// Set a 24-bit background color (SGR 48;2).
#[inline]
pub fn bg(w: &mut impl Write, color: HexColor) -> io::Result<()> {
    let (r, g, b) = color.rgb().to_tuple();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Set a 24-bit foreground color (SGR 38;2).
#[inline]
pub fn fg(w: &mut impl Write, color: HexColor) -> io::Result<()> {
    let (r, g, b) = color.rgb().to_tuple();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Painter ─────────────────────────────────────────────────────────────────

/// Which text color to draw over a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Muted,
}

/// Writes swatches, with or without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// `text` drawn over `background` in the readable tone.
    pub fn swatch(
        self,
        w: &mut impl Write,
        background: HexColor,
        text: &str,
        emphasis: Emphasis,
    ) -> io::Result<()> {
        if !self.color {
            return w.write_all(text.as_bytes());
        }
        let tone = TextTone::for_background(&background);
        let text_color = match emphasis {
            Emphasis::Primary => tone.primary(),
            Emphasis::Muted => tone.muted(),
        };
        bg(w, background)?;
        fg(w, text_color)?;
        w.write_all(text.as_bytes())?;
        reset(w)
    }

    /// One row of eleven cells, each labeled with its shade.
    pub fn ramp(self, w: &mut impl Write, ramp: &ShadeRamp) -> io::Result<()> {
        for (i, (label, hex)) in ramp.iter().enumerate() {
            if i > 0 && !self.color {
                w.write_all(b" ")?;
            }
            self.swatch(w, hex, &format!(" {label:^4}"), Emphasis::Primary)?;
        }
        writeln!(w)
    }

    /// The ramp as a table: one line per shade with its hex and lightness.
    pub fn ramp_table(self, w: &mut impl Write, ramp: &ShadeRamp) -> io::Result<()> {
        for (label, hex) in ramp {
            self.swatch(w, hex, &format!("  {label:>3}  "), Emphasis::Primary)?;
            writeln!(w, "  {hex}  {}", hex.hsl())?;
        }
        Ok(())
    }

    /// A palette entry: a header swatch with name and hex, then its ramp.
    pub fn color_card(self, w: &mut impl Write, color: &PaletteColor) -> io::Result<()> {
        self.swatch(w, color.hex, &format!(" {:<10}", color.name), Emphasis::Primary)?;
        self.swatch(w, color.hex, &format!("{} ", color.hex), Emphasis::Muted)?;
        writeln!(w)?;
        self.ramp(w, &color.shades)
    }

    /// Every color card, then sample text on the primary and secondary colors.
    pub fn preview(self, w: &mut impl Write, palette: &Palette) -> io::Result<()> {
        for color in palette {
            self.color_card(w, color)?;
            writeln!(w)?;
        }
        if let (Some(primary), Some(secondary)) = (palette.primary(), palette.secondary()) {
            self.sample(w, "Primary", primary.hex)?;
            self.sample(w, "Secondary", secondary.hex)?;
        }
        Ok(())
    }

    fn sample(self, w: &mut impl Write, role: &str, background: HexColor) -> io::Result<()> {
        let tone = TextTone::for_background(&background);
        self.swatch(w, background, &format!(" {role:<10}"), Emphasis::Primary)?;
        self.swatch(w, background, "Sample text ", Emphasis::Muted)?;
        writeln!(
            w,
            "  {} text, contrast {:.2}:1",
            tone_name(tone),
            contrast_ratio(&tone.primary(), &background)
        )
    }
}

pub const fn tone_name(tone: TextTone) -> &'static str {
    match tone {
        TextTone::Light => "light",
        TextTone::Dark => "dark",
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
