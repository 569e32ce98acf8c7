//! Background field layer: radial glow, streak bands, grain, vignette.

use crate::rarity::Rarity;
use crate::rng::Mulberry32;

use super::color::rgba;

/// Render the background scene for one card as an SVG group.
///
/// All stochastic choices come from a generator seeded with the card's
/// root seed, so the field is reproducible per id. Defs ids carry a
/// `bg-` prefix to stay collision-free once composed with the other
/// layers.
pub fn background_svg(rarity: Rarity, seed: u32, size: u32) -> String {
    let mut rng = Mulberry32::new(seed);
    let (glow, rim) = rarity.bg_colors();
    let s = size as f64;

    let tilt = (rng.next_f64() * 40.0).floor() as i32 - 20;
    let noise_alpha = 0.10 + rng.next_f64() * 0.14;

    let legendary = rarity == Rarity::Legendary;
    let rich = matches!(rarity, Rarity::Rare | Rarity::Epic | Rarity::Legendary);

    // Facet overlay only for the top tier: the "cut gem" look.
    let facets = if legendary {
        format!(
            r##"<pattern id="bg-facet" width="120" height="120" patternUnits="userSpaceOnUse">
        <path d="M0,60 L60,0 L120,60 L60,120 Z" fill="{}" stroke="{}" stroke-width="2"/>
        <path d="M60,0 L120,60" stroke="{}" stroke-width="2"/>
        <path d="M60,120 L120,60" stroke="{}" stroke-width="2"/>
        <path d="M0,60 L60,0" stroke="{}" stroke-width="2"/>
        <path d="M0,60 L60,120" stroke="{}" stroke-width="2"/>
      </pattern>"##,
            rgba("#ffffff", 0.06),
            rgba("#B4F0FF", 0.22),
            rgba("#ffffff", 0.14),
            rgba("#ffffff", 0.14),
            rgba("#ffffff", 0.10),
            rgba("#ffffff", 0.10),
        )
    } else {
        String::new()
    };

    let streak_count = if rich { 10 } else { 8 };
    let mut streaks = String::new();
    for i in 0..streak_count {
        let w = 28 + (rng.next_f64() * 26.0).floor() as i32;
        let x = -200 + i * 120 + (rng.next_f64() * 40.0).floor() as i32;
        let y = -300 + i * 90 + (rng.next_f64() * 60.0).floor() as i32;
        streaks.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{:.0}" height="{}" fill="{}"/>"#,
            x,
            y,
            s * 1.8,
            w,
            rgba(glow, 0.10)
        ));
    }

    let base_freq = 0.75 + rng.next_f64() * 0.25;

    format!(
        r##"<g>
    <defs>
      <radialGradient id="bg-glow" cx="50%" cy="35%" r="80%">
        <stop offset="0%" stop-color="{glow}" stop-opacity="0.55"/>
        <stop offset="60%" stop-color="{glow}" stop-opacity="0.18"/>
        <stop offset="100%" stop-color="{rim}" stop-opacity="1"/>
      </radialGradient>
      <filter id="bg-noise">
        <feTurbulence type="fractalNoise" baseFrequency="{base_freq:.2}" numOctaves="2" stitchTiles="stitch"/>
        <feColorMatrix type="saturate" values="0"/>
        <feComponentTransfer>
          <feFuncA type="table" tableValues="0 {noise_alpha:.3}"/>
        </feComponentTransfer>
      </filter>
      {facets}
      <linearGradient id="bg-vignette" x1="0" y1="0" x2="0" y2="1">
        <stop offset="0%" stop-color="rgba(0,0,0,0.10)"/>
        <stop offset="75%" stop-color="rgba(0,0,0,0.45)"/>
        <stop offset="100%" stop-color="rgba(0,0,0,0.65)"/>
      </linearGradient>
    </defs>
    <rect width="{size}" height="{size}" fill="url(#bg-glow)"/>
    <g transform="rotate({tilt} {half:.0} {half:.0})">{streaks}</g>
    {facet_fill}
    <rect width="{size}" height="{size}" filter="url(#bg-noise)"/>
    <rect width="{size}" height="{size}" fill="url(#bg-vignette)"/>
  </g>"##,
        glow = glow,
        rim = rim,
        base_freq = base_freq,
        noise_alpha = noise_alpha,
        facets = facets,
        size = size,
        tilt = tilt,
        half = s / 2.0,
        streaks = streaks,
        facet_fill = if legendary {
            format!(r#"<rect width="{size}" height="{size}" fill="url(#bg-facet)"/>"#)
        } else {
            String::new()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scene() {
        let a = background_svg(Rarity::Epic, 9_001, 256);
        let b = background_svg(Rarity::Epic, 9_001, 256);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = background_svg(Rarity::Epic, 1, 256);
        let b = background_svg(Rarity::Epic, 2, 256);
        assert_ne!(a, b);
    }

    #[test]
    fn facets_are_legendary_only() {
        assert!(background_svg(Rarity::Legendary, 5, 256).contains("bg-facet"));
        for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic] {
            assert!(!background_svg(rarity, 5, 256).contains("bg-facet"));
        }
    }

    #[test]
    fn richer_tiers_get_more_streaks() {
        let common = background_svg(Rarity::Common, 77, 256);
        let rare = background_svg(Rarity::Rare, 77, 256);
        let count = |svg: &str| svg.matches("<rect x=\"").count();
        assert_eq!(count(&common), 8);
        assert_eq!(count(&rare), 10);
    }

    #[test]
    fn glow_uses_tier_palette() {
        let svg = background_svg(Rarity::Uncommon, 3, 256);
        assert!(svg.contains("#3AB2FF"));
    }
}
