//! Device layer: chassis shroud, fans, vents, plate, finish overlays.

use std::f64::consts::PI;

use crate::rarity::{Material, Rarity};
use crate::rng::{chance, pick, Mulberry32};

use super::color::rgba;

/// Chassis silhouettes the generator can roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Model {
    DualFan,
    TripleFan,
    Aero,
    Chunky,
    Slim,
}

const MODELS: [Model; 5] = [
    Model::DualFan,
    Model::TripleFan,
    Model::Aero,
    Model::Chunky,
    Model::Slim,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BladeStyle {
    Sharp,
    Curved,
    Chunky,
}

const BLADE_STYLES: [BladeStyle; 3] = [BladeStyle::Sharp, BladeStyle::Curved, BladeStyle::Chunky];

const BASE_DARKS: [&str; 4] = ["#0B0F14", "#0E0E12", "#10141A", "#0A0A0C"];
const BASE_MIDS: [&str; 4] = ["#1B2230", "#222A36", "#20242C", "#262A33"];
const PLATE_TEXTS: [&str; 4] = ["H42", "HASH42", "LABS", "42"];

/// Render the device scene for one card as an SVG group.
///
/// Seeded separately from the background (the caller passes the root
/// seed offset by a fixed constant) so chassis choices don't correlate
/// with the field behind them. Defs ids carry a `dev-` prefix.
pub fn device_svg(rarity: Rarity, seed: u32, size: u32) -> String {
    let mut rng = Mulberry32::new(seed);
    let s = size as f64;
    let legendary = rarity == Rarity::Legendary;

    let mut model = *pick(&MODELS, &mut rng);
    // Legendary skews toward the aggressive silhouettes.
    if legendary && chance(0.6, &mut rng) {
        model = *pick(&[Model::Chunky, Model::Aero], &mut rng);
    }

    let fan_count = match model {
        Model::DualFan | Model::Slim => 2,
        Model::TripleFan => 3,
        Model::Aero | Model::Chunky => {
            if chance(0.55, &mut rng) {
                3
            } else {
                2
            }
        }
    };

    let material = *pick(rarity.material_pool(), &mut rng);
    let base_dark = *pick(&BASE_DARKS, &mut rng);
    let base_mid = *pick(&BASE_MIDS, &mut rng);

    let accents = rarity.accent_pool();
    let accent1 = *pick(accents, &mut rng);
    let accent2 = *pick(accents, &mut rng);

    let rgb_fans = match rarity {
        Rarity::Legendary => true,
        Rarity::Epic => chance(0.85, &mut rng),
        _ => chance(0.35, &mut rng),
    };

    let has_led = legendary
        || chance(if rarity == Rarity::Common { 0.35 } else { 0.60 }, &mut rng);
    let led_on_top = *pick(&[true, false], &mut rng);

    let corner = 22.0 + (rng.next_f64() * 20.0).floor();
    let notch = chance(0.55, &mut rng);
    let vent_count = 6 + (rng.next_f64() * 9.0).floor() as usize;

    let plate = chance(if rarity == Rarity::Common { 0.25 } else { 0.55 }, &mut rng);
    let plate_text = *pick(&PLATE_TEXTS, &mut rng);

    let gold_plated = legendary && (material == Material::Gold || chance(0.7, &mut rng));
    let diamond_coat = legendary && (material == Material::Diamond || chance(0.5, &mut rng));

    // Device box inside the card frame.
    let gx = s * 0.14;
    let gy = s * 0.26;
    let gw = s * 0.72;
    let gh = s * 0.44;

    let fan_y = gy + gh * 0.56;
    let fan_r = gw * if fan_count == 3 { 0.11 } else { 0.14 };
    let fan_xs: Vec<f64> = if fan_count == 3 {
        vec![gx + gw * 0.26, gx + gw * 0.50, gx + gw * 0.74]
    } else {
        vec![gx + gw * 0.34, gx + gw * 0.66]
    };

    let mut vents = String::new();
    for i in 0..vent_count {
        let vx = gx + gw * 0.08 + i as f64 * (gw * 0.80) / vent_count as f64;
        let vy = gy + gh * 0.18;
        let vw = gw * 0.03;
        let vh = gh * 0.12 + (i % 3) as f64 * gh * 0.02;
        vents.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}"/>"#,
            vx,
            vy,
            vw,
            vh,
            vw / 2.0,
            rgba("#000000", 0.35)
        ));
    }

    let mut screws = String::new();
    for (sx, sy) in [
        (gx + gw * 0.06, gy + gh * 0.12),
        (gx + gw * 0.94, gy + gh * 0.12),
        (gx + gw * 0.06, gy + gh * 0.88),
        (gx + gw * 0.94, gy + gh * 0.88),
    ] {
        screws.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            sx,
            sy,
            gw * 0.012,
            rgba("#FFFFFF", 0.18)
        ));
    }

    let mut fans = String::new();
    for (i, &cx) in fan_xs.iter().enumerate() {
        let ring_width = fan_r * if legendary { 0.18 } else { 0.14 };
        let ring = if rgb_fans {
            r#"stroke="url(#dev-rgb)" stroke-opacity="0.75""#.to_string()
        } else {
            format!(r#"stroke="{}""#, rgba(accent1, 0.75))
        };
        let blades = fan_blades(
            cx,
            fan_y,
            fan_r * 0.86,
            seed.wrapping_add(i as u32 * 999),
            rgb_fans,
            accent2,
        );
        fans.push_str(&format!(
            r#"<g>
      <circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{well}"/>
      <circle cx="{cx:.2}" cy="{cy:.2}" r="{ring_r:.2}" fill="none" {ring} stroke-width="{ring_w:.2}"/>
      <circle cx="{cx:.2}" cy="{cy:.2}" r="{hub_r:.2}" fill="{hub}"/>
      {blades}
      <circle cx="{cx:.2}" cy="{cy:.2}" r="{cap_r:.2}" fill="{cap}" stroke="{cap_ring}" stroke-width="{cap_w:.2}"/>
    </g>"#,
            cx = cx,
            cy = fan_y,
            r = fan_r,
            well = rgba("#000000", 0.40),
            ring_r = fan_r * 0.92,
            ring = ring,
            ring_w = ring_width,
            hub_r = fan_r * 0.70,
            hub = rgba("#0A0A0C", 0.85),
            blades = blades,
            cap_r = fan_r * 0.18,
            cap = rgba("#000000", 0.35),
            cap_ring = rgba("#ffffff", 0.10),
            cap_w = fan_r * 0.06,
        ));
    }

    let top_notch = if notch {
        format!(
            "L {:.2} {:.2} L {:.2} {:.2}",
            gx + gw * 0.55,
            gy,
            gx + gw * 0.60,
            gy + gh * 0.08
        )
    } else {
        String::new()
    };

    let shroud_path = format!(
        "M {x0:.2} {gy:.2} L {x1:.2} {gy:.2} {notch} L {x2:.2} {gy:.2} \
         Q {xr:.2} {gy:.2} {xr:.2} {y0:.2} L {xr:.2} {y1:.2} \
         Q {xr:.2} {yb:.2} {x2:.2} {yb:.2} L {x0:.2} {yb:.2} \
         Q {gx:.2} {yb:.2} {gx:.2} {y1:.2} L {gx:.2} {y0:.2} \
         Q {gx:.2} {gy:.2} {x0:.2} {gy:.2} Z",
        x0 = gx + corner,
        x1 = gx + gw * 0.42,
        notch = top_notch,
        x2 = gx + gw - corner,
        xr = gx + gw,
        gx = gx,
        gy = gy,
        y0 = gy + corner,
        y1 = gy + gh - corner,
        yb = gy + gh,
    );

    let led = if has_led {
        let led_h = gh * 0.06;
        let led_y = if led_on_top { gy + gh * 0.10 } else { gy + gh * 0.88 };
        format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            gx + gw * 0.16,
            led_y,
            gw * 0.68,
            led_h,
            led_h / 2.0,
            rgba(accent1, 0.32),
            rgba(accent2, 0.28)
        )
    } else {
        String::new()
    };

    let plate_svg = if plate {
        let pw = gw * 0.22;
        let ph = gh * 0.10;
        let px = gx + gw * 0.70;
        let py = gy + gh * 0.18;
        let rot = (rng.next_f64() * 16.0).floor() as i32 - 8;
        format!(
            r#"<g transform="rotate({rot} {cx:.2} {cy:.2})">
      <rect x="{px:.2}" y="{py:.2}" width="{pw:.2}" height="{ph:.2}" rx="{prx:.2}" fill="{fill}" stroke="{stroke}" stroke-width="3"/>
      <text x="{tx:.2}" y="{ty:.2}" text-anchor="middle" font-family="Arial, Helvetica, sans-serif" font-size="{fs:.2}" font-weight="900" fill="{text_fill}">{text}</text>
    </g>"#,
            rot = rot,
            cx = px + pw / 2.0,
            cy = py + ph / 2.0,
            px = px,
            py = py,
            pw = pw,
            ph = ph,
            prx = ph * 0.35,
            fill = rgba("#000000", 0.35),
            stroke = rgba(accent1, 0.55),
            tx = px + pw / 2.0,
            ty = py + ph * 0.70,
            fs = ph * 0.60,
            text_fill = rgba(accent2, 0.95),
            text = plate_text,
        )
    } else {
        String::new()
    };

    let shine_rot = (rng.next_f64() * 26.0).floor() as i32 - 13;
    let shine_opacity = 0.65 + rng.next_f64() * 0.25;

    let model_cuts = match model {
        Model::Aero => format!(
            r#"<path d="M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z" fill="{}"/>"#,
            gx + gw * 0.18,
            gy + gh * 0.22,
            gx + gw * 0.40,
            gy + gh * 0.22,
            gx + gw * 0.33,
            gy + gh * 0.38,
            rgba("#000000", 0.25)
        ),
        Model::Slim => format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}"/>"#,
            gx + gw * 0.08,
            gy + gh * 0.10,
            gw * 0.84,
            gh * 0.06,
            gh * 0.03,
            rgba("#000000", 0.22)
        ),
        Model::Chunky => format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}"/>"#,
            gx + gw * 0.06,
            gy + gh * 0.70,
            gw * 0.88,
            gh * 0.10,
            gh * 0.05,
            rgba("#000000", 0.22)
        ),
        _ => String::new(),
    };

    let gold_overlay = if gold_plated {
        format!(
            r#"<rect x="{gx:.2}" y="{gy:.2}" width="{gw:.2}" height="{gh:.2}" rx="{corner:.0}" fill="url(#dev-gold)" opacity="0.55"/>"#
        )
    } else {
        String::new()
    };

    let diamond_overlay = if diamond_coat {
        format!(
            r#"<rect x="{gx:.2}" y="{gy:.2}" width="{gw:.2}" height="{gh:.2}" rx="{corner:.0}" fill="url(#dev-dust)" opacity="0.45"/>"#
        )
    } else {
        String::new()
    };

    let frame = if legendary {
        format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.0}" fill="none" stroke="url(#dev-frame)" stroke-width="6" opacity="0.95"/>"#,
            gx - 10.0,
            gy - 10.0,
            gw + 20.0,
            gh + 20.0,
            corner + 12.0
        )
    } else {
        String::new()
    };

    let rgb_gradient = if rgb_fans {
        r##"<linearGradient id="dev-rgb" x1="0" y1="0" x2="1" y2="1">
        <stop offset="0%" stop-color="#FF2D55"/>
        <stop offset="35%" stop-color="#7CFF6B"/>
        <stop offset="70%" stop-color="#3AB2FF"/>
        <stop offset="100%" stop-color="#FFD36A"/>
      </linearGradient>"##
            .to_string()
    } else {
        String::new()
    };

    let carbon_grain = if material == Material::Carbon {
        format!(
            r#"<rect x="{gx:.2}" y="{gy:.2}" width="{gw:.2}" height="{gh:.2}" rx="{corner:.0}" filter="url(#dev-grain)"/>"#
        )
    } else {
        String::new()
    };

    format!(
        r##"<g>
    <defs>
      {rgb_gradient}
      <linearGradient id="dev-shroud" x1="0" y1="0" x2="1" y2="1">
        <stop offset="0%" stop-color="{base_mid}" stop-opacity="1"/>
        <stop offset="70%" stop-color="{base_dark}" stop-opacity="1"/>
        <stop offset="100%" stop-color="#000000" stop-opacity="1"/>
      </linearGradient>
      <linearGradient id="dev-trim" x1="0" y1="0" x2="1" y2="0">
        <stop offset="0%" stop-color="{trim_a}"/>
        <stop offset="100%" stop-color="{trim_b}"/>
      </linearGradient>
      <filter id="dev-shadow">
        <feGaussianBlur stdDeviation="14" result="b"/>
        <feColorMatrix type="matrix" values="0 0 0 0 0  0 0 0 0 0  0 0 0 0 0  0 0 0 0.45 0"/>
      </filter>
      <filter id="dev-spec">
        <feGaussianBlur stdDeviation="{spec_blur}"/>
      </filter>
      <filter id="dev-grain">
        <feTurbulence type="fractalNoise" baseFrequency="0.95" numOctaves="2" stitchTiles="stitch"/>
        <feColorMatrix type="saturate" values="0"/>
        <feComponentTransfer>
          <feFuncA type="table" tableValues="0 {grain:.2}"/>
        </feComponentTransfer>
      </filter>
      <linearGradient id="dev-shine" x1="0" y1="0" x2="1" y2="1">
        <stop offset="0%" stop-color="rgba(255,255,255,0)"/>
        <stop offset="45%" stop-color="rgba(255,255,255,{shine:.2})"/>
        <stop offset="55%" stop-color="rgba(255,255,255,{shine_soft:.2})"/>
        <stop offset="100%" stop-color="rgba(255,255,255,0)"/>
      </linearGradient>
      <linearGradient id="dev-gold" x1="0" y1="0" x2="1" y2="1">
        <stop offset="0%" stop-color="rgba(255,211,106,0.75)"/>
        <stop offset="35%" stop-color="rgba(214,161,0,0.45)"/>
        <stop offset="100%" stop-color="rgba(255,242,196,0.25)"/>
      </linearGradient>
      <pattern id="dev-dust" width="90" height="90" patternUnits="userSpaceOnUse">
        <path d="M0,45 L45,0 L90,45 L45,90 Z" fill="rgba(255,255,255,0.06)" stroke="rgba(180,240,255,0.18)" stroke-width="2"/>
        <path d="M45,0 L90,45" stroke="rgba(255,255,255,0.10)" stroke-width="2"/>
        <path d="M45,90 L90,45" stroke="rgba(255,255,255,0.10)" stroke-width="2"/>
      </pattern>
      <linearGradient id="dev-frame" x1="0" y1="0" x2="1" y2="1">
        <stop offset="0%" stop-color="rgba(255,211,106,0.95)"/>
        <stop offset="45%" stop-color="rgba(154,217,255,0.70)"/>
        <stop offset="100%" stop-color="rgba(255,242,196,0.90)"/>
      </linearGradient>
    </defs>
    <path d="{shroud_path}" fill="black" opacity="0.55" filter="url(#dev-shadow)"/>
    <path d="{shroud_path}" fill="url(#dev-shroud)"/>
    {carbon_grain}
    <path d="{shroud_path}" fill="none" stroke="url(#dev-trim)" stroke-width="6" opacity="{trim_opacity}"/>
    {vents}
    {model_cuts}
    {fans}
    {led}
    {plate_svg}
    {screws}
    <g transform="rotate({shine_rot} {half:.0} {half:.0})">
      <rect x="{shine_x:.0}" y="{shine_y:.0}" width="{shine_w:.0}" height="{shine_h:.0}" fill="url(#dev-shine)" opacity="{shine_opacity:.2}" filter="url(#dev-spec)"/>
    </g>
    {gold_overlay}
    {diamond_overlay}
    {frame}
  </g>"##,
        rgb_gradient = rgb_gradient,
        base_mid = base_mid,
        base_dark = base_dark,
        trim_a = rgba(accent1, 0.95),
        trim_b = rgba(accent2, 0.75),
        spec_blur = if material == Material::Chrome { 10 } else { 8 },
        grain = material.grain(),
        shine = material.shine(),
        shine_soft = material.shine() * 0.45,
        shroud_path = shroud_path,
        carbon_grain = carbon_grain,
        trim_opacity = if rarity == Rarity::Common { 0.55 } else { 0.80 },
        vents = vents,
        model_cuts = model_cuts,
        fans = fans,
        led = led,
        plate_svg = plate_svg,
        screws = screws,
        shine_rot = shine_rot,
        half = s / 2.0,
        shine_x = -(s * 0.2).floor(),
        shine_y = (s * 0.22).floor(),
        shine_w = (s * 1.5).floor(),
        shine_h = (s * 0.16).floor(),
        shine_opacity = shine_opacity,
        gold_overlay = gold_overlay,
        diamond_overlay = diamond_overlay,
        frame = frame,
    )
}

/// Blade fan for one hub, drawn from a sub-generator derived from the
/// device seed so each fan spins its own pattern.
fn fan_blades(cx: f64, cy: f64, r: f64, seed: u32, rgb_fans: bool, accent2: &str) -> String {
    let mut rng = Mulberry32::new(seed);
    let blades = 7 + (rng.next_f64() * 6.0).floor() as usize;
    let style = *pick(&BLADE_STYLES, &mut rng);
    let opacity = if rgb_fans { 0.20 } else { 0.14 };
    let fill = if rgb_fans {
        "url(#dev-rgb)".to_string()
    } else {
        rgba(accent2, 0.35)
    };

    let inner = r * if style == BladeStyle::Chunky { 0.35 } else { 0.28 };
    let outer = r * if style == BladeStyle::Sharp { 0.98 } else { 0.90 };

    let mut paths = String::new();
    for i in 0..blades {
        let ang = i as f64 / blades as f64 * PI * 2.0;
        let a2 = ang + PI * 2.0 / blades as f64 * 0.55;

        let x1 = cx + ang.cos() * inner;
        let y1 = cy + ang.sin() * inner;
        let x2 = cx + a2.cos() * outer;
        let y2 = cy + a2.sin() * outer;
        let x3 = cx + ang.cos() * outer;
        let y3 = cy + ang.sin() * outer;

        if style == BladeStyle::Curved {
            let mid = (ang + a2) / 2.0;
            let mx = cx + mid.cos() * (outer * 0.92);
            let my = cy + mid.sin() * (outer * 0.92);
            paths.push_str(&format!(
                r#"<path d="M {x1:.2} {y1:.2} Q {mx:.2} {my:.2} {x2:.2} {y2:.2} L {x3:.2} {y3:.2} Z" fill="{fill}" opacity="{opacity}"/>"#
            ));
        } else {
            paths.push_str(&format!(
                r#"<path d="M {x1:.2} {y1:.2} L {x2:.2} {y2:.2} L {x3:.2} {y3:.2} Z" fill="{fill}" opacity="{opacity}"/>"#
            ));
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scene() {
        let a = device_svg(Rarity::Rare, 123_456, 256);
        let b = device_svg(Rarity::Rare, 123_456, 256);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(
            device_svg(Rarity::Rare, 1, 256),
            device_svg(Rarity::Rare, 2, 256)
        );
    }

    #[test]
    fn legendary_always_gets_rgb_fans_and_frame() {
        for seed in 0..32u32 {
            let svg = device_svg(Rarity::Legendary, seed, 256);
            assert!(svg.contains("url(#dev-rgb)"), "seed {} lost RGB fans", seed);
            assert!(svg.contains("url(#dev-frame)"), "seed {} lost the frame", seed);
        }
    }

    #[test]
    fn lower_tiers_never_get_the_frame() {
        for seed in 0..32u32 {
            for rarity in [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic] {
                let svg = device_svg(rarity, seed, 256);
                assert!(!svg.contains("url(#dev-frame)"));
                assert!(!svg.contains("url(#dev-gold)"));
                assert!(!svg.contains("url(#dev-dust)"));
            }
        }
    }

    #[test]
    fn fan_hubs_are_two_or_three() {
        for seed in 0..64u32 {
            let svg = device_svg(Rarity::Uncommon, seed, 256);
            let hubs = svg.matches(r#"fill="rgba(10,10,12,0.85)""#).count();
            assert!(hubs == 2 || hubs == 3, "seed {} drew {} hubs", seed, hubs);
        }
    }

    #[test]
    fn blade_counts_stay_in_range() {
        for seed in 0..64u32 {
            let blades = fan_blades(100.0, 100.0, 40.0, seed, false, "#00FF66");
            let count = blades.matches("<path").count();
            assert!((7..=12).contains(&count), "seed {} drew {} blades", seed, count);
        }
    }
}
