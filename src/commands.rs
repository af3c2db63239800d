// SPDX-License-Identifier: MIT
//
// Subcommand handlers.
//
// Each handler writes to the `out` it is given instead of stdout directly,
// which is what lets the tests below drive them against a Vec<u8>.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use huekit_color::{HexColor, Rgb, random_color, random_color_with};
use huekit_palette::{
    BUILTIN_PRESETS, ExportFormat, Harmony, Palette, Preset, TextTone, builtin_preset,
    contrast_ratio, relative_luminance,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::AppConfig;
use crate::store::{PresetStore, StoreError};
use crate::swatch::{Emphasis, Painter, tone_name};
use crate::{PaletteArgs, PresetCmd, RandomArgs};

// ─── Input ───────────────────────────────────────────────────────────────────

/// Parse `R,G,B`, clamping each channel into 0..=255.
///
/// Channels must be whole numbers; anything else is rejected rather than
/// guessed at.
pub fn parse_rgb(input: &str) -> anyhow::Result<Rgb> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        bail!("expected R,G,B with three channels, got {input:?}");
    };
    let channel = |s: &str| {
        s.parse::<i64>()
            .with_context(|| format!("channel {s:?} in {input:?} is not a whole number"))
    };
    Ok(Rgb::clamped(channel(r)?, channel(g)?, channel(b)?))
}

impl PaletteArgs {
    pub(crate) fn base_color(&self, config: &AppConfig) -> anyhow::Result<HexColor> {
        match (&self.color, &self.rgb) {
            (Some(hex), _) => Ok(*hex),
            (None, Some(rgb)) => Ok(HexColor::from_rgb(parse_rgb(rgb)?)),
            (None, None) => Ok(config.base_color),
        }
    }

    fn harmony(&self, config: &AppConfig) -> Harmony {
        self.harmony.unwrap_or(config.harmony)
    }

    fn palette(&self, config: &AppConfig) -> anyhow::Result<Palette> {
        Ok(Palette::generate(&self.base_color(config)?, self.harmony(config)))
    }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

pub fn generate(
    config: &AppConfig,
    args: &PaletteArgs,
    format: Option<ExportFormat>,
    output: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let palette = args.palette(config)?;
    let format = format.unwrap_or(config.format);
    let rendered = format.render(&palette)?;
    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("writing {format} export to {}", path.display()))?;
            info!(path = %path.display(), format = %format, "wrote export");
        }
        None => writeln!(out, "{rendered}")?,
    }
    Ok(())
}

pub fn shades(color: HexColor, painter: Painter, out: &mut impl Write) -> anyhow::Result<()> {
    let ramp = huekit_palette::generate_shades(&color);
    writeln!(out, "{color}  {}", color.hsl())?;
    painter.ramp_table(out, &ramp)?;
    Ok(())
}

pub fn convert(color: HexColor, painter: Painter, out: &mut impl Write) -> anyhow::Result<()> {
    let tone = TextTone::for_background(&color);
    painter.swatch(out, color, "        ", Emphasis::Primary)?;
    writeln!(out)?;
    writeln!(out, "hex        {color}")?;
    writeln!(out, "rgb        {}", color.rgb())?;
    writeln!(out, "hsl        {}", color.hsl())?;
    writeln!(out, "luminance  {:.4}", relative_luminance(&color))?;
    writeln!(
        out,
        "text       {} ({}, contrast {:.2}:1)",
        tone_name(tone),
        tone.primary(),
        contrast_ratio(&tone.primary(), &color)
    )?;
    Ok(())
}

pub fn preview(
    config: &AppConfig,
    args: &PaletteArgs,
    painter: Painter,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let base = args.base_color(config)?;
    let harmony = args.harmony(config);
    writeln!(out, "{base} · {}\n", harmony.label())?;
    painter.preview(out, &Palette::generate(&base, harmony))?;
    Ok(())
}

pub fn random(
    config: &AppConfig,
    args: &RandomArgs,
    painter: Painter,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let color = match args.seed {
        Some(seed) => random_color_with(&mut StdRng::seed_from_u64(seed)),
        None => random_color(),
    };
    info!(color = %color, seed = ?args.seed, "picked random color");
    match args.format {
        Some(format) => {
            let harmony = args.harmony.unwrap_or(config.harmony);
            writeln!(out, "{}", format.render(&Palette::generate(&color, harmony))?)?;
        }
        None => {
            painter.swatch(out, color, &format!(" {color} "), Emphasis::Primary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn preset(config: &AppConfig, cmd: PresetCmd, out: &mut impl Write) -> anyhow::Result<()> {
    let store = PresetStore::new(&config.presets_path);
    match cmd {
        PresetCmd::List => {
            writeln!(out, "builtin")?;
            for p in BUILTIN_PRESETS {
                writeln!(out, "  {:<10} {}  {}", p.name, p.base_color, p.harmony)?;
            }
            let saved = store.load()?;
            writeln!(out, "saved ({})", store.path().display())?;
            for p in &saved {
                writeln!(
                    out,
                    "  {:<10} {}  {}  {}",
                    p.name, p.base_color, p.harmony, p.id
                )?;
            }
        }
        PresetCmd::Save { name, palette } => {
            let name = name.trim().to_owned();
            if name.is_empty() {
                bail!("preset name must not be empty");
            }
            let preset = Preset::new(name, palette.base_color(config)?, palette.harmony(config));
            let id = preset.id;
            store.add(preset)?;
            writeln!(out, "{id}")?;
        }
        PresetCmd::Show { key, format } => {
            let palette = match store.find(&key) {
                Ok(saved) => saved.palette(),
                Err(StoreError::NotFound(_)) => builtin_preset(&key)
                    .with_context(|| format!("no builtin or saved preset named {key:?}"))?
                    .palette(),
                Err(err) => return Err(err.into()),
            };
            let format = format.unwrap_or(config.format);
            writeln!(out, "{}", format.render(&palette)?)?;
        }
        PresetCmd::Delete { id } => {
            let removed = store.remove(id)?;
            writeln!(out, "deleted {} ({})", removed.name, removed.id)?;
        }
    }
    Ok(())
}

pub fn formats(out: &mut impl Write) -> anyhow::Result<()> {
    for format in ExportFormat::all() {
        writeln!(
            out,
            "{:<10} {:<16} .{}",
            format.name(),
            format.label(),
            format.file_extension()
        )?;
    }
    Ok(())
}

pub fn harmonies(out: &mut impl Write) -> anyhow::Result<()> {
    for harmony in Harmony::all() {
        writeln!(out, "{:<20} {}", harmony.name(), harmony.description())?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    fn args(color: Option<&str>, rgb: Option<&str>, harmony: Option<Harmony>) -> PaletteArgs {
        PaletteArgs {
            color: color.map(hex),
            rgb: rgb.map(str::to_owned),
            harmony,
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            presets_path: dir.path().join("presets.json"),
            ..AppConfig::default()
        }
    }

    // ── Input ───────────────────────────────────────────────────────

    #[test]
    fn parse_rgb_clamps() {
        assert_eq!(parse_rgb("300, -5, 128").unwrap(), Rgb::new(255, 0, 128));
        assert_eq!(parse_rgb("139,92,246").unwrap(), Rgb::new(139, 92, 246));
    }

    #[test]
    fn parse_rgb_rejects_malformed() {
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,3,4").is_err());
        assert!(parse_rgb("1,two,3").is_err());
        assert!(parse_rgb("1.5,2,3").is_err());
    }

    #[test]
    fn base_color_precedence() {
        let config = AppConfig::default();
        assert_eq!(args(Some("#0EA5E9"), None, None).base_color(&config).unwrap(), hex("#0EA5E9"));
        assert_eq!(args(None, Some("255,0,0"), None).base_color(&config).unwrap(), hex("#FF0000"));
        assert_eq!(args(None, None, None).base_color(&config).unwrap(), config.base_color);
    }

    // ── Handlers ────────────────────────────────────────────────────

    #[test]
    fn generate_css_to_stdout() {
        let config = AppConfig::default();
        let out = run(|w| generate(&config, &args(None, None, None), None, None, w));
        assert!(out.starts_with(":root {\n  --color-1-50: #EEE7FE;"));
        assert!(out.ends_with("}\n"));
        assert_eq!(out.lines().count(), 24);
    }

    #[test]
    fn generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.scss");
        let config = AppConfig::default();
        let out = run(|w| {
            generate(
                &config,
                &args(Some("#FF0000"), None, Some(Harmony::Triadic)),
                Some(ExportFormat::Scss),
                Some(&path),
                w,
            )
        });
        assert!(out.is_empty());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("$color-1-50: #FFE5E5;"));
        assert_eq!(written.lines().count(), 33);
    }

    #[test]
    fn convert_plain() {
        let out = run(|w| convert(hex("#8B5CF6"), Painter::new(false), w));
        let lines: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec![
                "hex        #8B5CF6",
                "rgb        rgb(139, 92, 246)",
                "hsl        hsl(258, 90%, 66%)",
                "luminance  0.1980",
                "text       light (#FFFFFF, contrast 4.23:1)",
            ]
        );
    }

    #[test]
    fn shades_plain() {
        let out = run(|w| shades(hex("#808080"), Painter::new(false), w));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "#808080  hsl(0, 0%, 50%)");
        assert!(lines[6].contains("#808080"));
    }

    #[test]
    fn random_with_seed_is_reproducible() {
        let config = AppConfig::default();
        let seeded = RandomArgs {
            harmony: None,
            format: Some(ExportFormat::Json),
            seed: Some(7),
        };
        let a = run(|w| random(&config, &seeded, Painter::new(false), w));
        let b = run(|w| random(&config, &seeded, Painter::new(false), w));
        assert_eq!(a, b);
        assert!(a.starts_with("{\n  \"color-1\": {"));
    }

    #[test]
    fn preset_save_show_delete() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let id = run(|w| {
            preset(
                &config,
                PresetCmd::Save {
                    name: "brand".into(),
                    palette: args(Some("#FF0000"), None, Some(Harmony::Complementary)),
                },
                w,
            )
        });
        let id: uuid::Uuid = id.trim().parse().unwrap();

        let shown = run(|w| {
            preset(
                &config,
                PresetCmd::Show { key: "brand".into(), format: Some(ExportFormat::Scss) },
                w,
            )
        });
        assert!(shown.starts_with("$color-1-50: #FFE5E5;"));
        assert_eq!(shown.lines().count(), 22);

        let listed = run(|w| preset(&config, PresetCmd::List, w));
        assert!(listed.contains("brand"));
        assert!(listed.contains(&id.to_string()));

        let deleted = run(|w| preset(&config, PresetCmd::Delete { id }, w));
        assert!(deleted.starts_with("deleted brand"));
        assert!(PresetStore::new(&config.presets_path).load().unwrap().is_empty());
    }

    #[test]
    fn preset_show_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let shown = run(|w| {
            preset(&config, PresetCmd::Show { key: "default".into(), format: None }, w)
        });
        let expected = ExportFormat::Css
            .render(&Palette::generate(&hex("#8B5CF6"), Harmony::Complementary))
            .unwrap();
        assert_eq!(shown, format!("{expected}\n"));
    }

    #[test]
    fn preset_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let mut sink = Vec::new();
        assert!(
            preset(&config, PresetCmd::Show { key: "lava".into(), format: None }, &mut sink)
                .is_err()
        );
        assert!(preset(&config, PresetCmd::Delete { id: uuid::Uuid::nil() }, &mut sink).is_err());
        assert!(
            preset(
                &config,
                PresetCmd::Save { name: "  ".into(), palette: args(None, None, None) },
                &mut sink
            )
            .is_err()
        );
    }

    #[test]
    fn listings() {
        let listed = run(|w| formats(w));
        assert_eq!(listed.lines().count(), 4);
        assert!(listed.contains("tailwind"));
        let listed = run(|w| harmonies(w));
        assert_eq!(listed.lines().count(), 5);
        assert!(listed.starts_with("complementary"));
    }
}
