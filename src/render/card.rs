//! Full card composition: background, device, header bar, badge, frame.

use crate::rarity::Rarity;
use crate::rng::Mulberry32;

use super::background::background_svg;
use super::color::rgba;
use super::device::device_svg;

/// Fixed offset decorrelating the device layer from the background.
pub const DEVICE_SEED_OFFSET: u32 = 777;

const FONT_STACK: &str = "Arial, Helvetica, sans-serif";

/// Compose the complete card scene for one id as a standalone SVG
/// document, ready for rasterization.
pub fn card_svg(rarity: Rarity, id: u32, hashrate_label: &str, seed: u32, size: u32) -> String {
    let background = background_svg(rarity, seed, size);
    let device = device_svg(rarity, seed.wrapping_add(DEVICE_SEED_OFFSET), size);

    let mut rng = Mulberry32::new(seed);
    let s = size as f64;
    let header_h = (s * 0.135).floor();

    let badge_text = rarity.label().to_uppercase();
    let badge_fill = if rarity == Rarity::Legendary {
        "rgba(0,0,0,0.35)"
    } else {
        "rgba(0,0,0,0.40)"
    };
    let badge_stroke = rgba(
        rarity.bg_colors().0,
        if rarity == Rarity::Legendary { 0.75 } else { 0.55 },
    );

    let serial = format!("{:03}-{:04}", id, (rng.next_f64() * 9999.0).floor() as u32);

    // Device sits slightly lower so the header stays readable.
    let device_ty = (s * 0.02).floor();

    format!(
        r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  {background}
  <rect x="0" y="0" width="{size}" height="{header_h:.0}" fill="rgba(0,0,0,0.42)"/>
  <rect x="0" y="{header_line:.0}" width="{size}" height="1" fill="rgba(255,255,255,0.10)"/>
  <text x="{title_x:.0}" y="{title_y:.0}" font-family="{font}" font-size="{title_fs:.0}" font-weight="900" fill="rgba(255,255,255,0.92)" letter-spacing="0.6">{label} &#8226; {hashrate}</text>
  <text x="{title_x:.0}" y="{sub_y:.0}" font-family="{font}" font-size="{sub_fs:.0}" font-weight="700" fill="rgba(255,255,255,0.55)">#{id:03} &#8226; {serial}</text>
  <g transform="translate({badge_x:.0}, {badge_y:.0})">
    <rect x="0" y="0" rx="16" ry="16" width="{badge_w:.0}" height="{badge_h:.0}" fill="{badge_fill}" stroke="{badge_stroke}" stroke-width="3"/>
    <text x="{badge_tx:.0}" y="{badge_ty:.0}" text-anchor="middle" font-family="{font}" font-size="{badge_fs:.0}" font-weight="900" fill="rgba(255,255,255,0.88)">{badge_text}</text>
  </g>
  <g transform="translate(0, {device_ty:.0}) scale(0.96)">
    {device}
  </g>
  <rect x="18" y="18" width="{frame_w}" height="{frame_w}" rx="34" ry="34" fill="none" stroke="rgba(255,255,255,0.10)" stroke-width="2"/>
</svg>"##,
        size = size,
        background = background,
        header_h = header_h,
        header_line = header_h - 1.0,
        title_x = (s * 0.05).floor(),
        title_y = (s * 0.075).floor(),
        title_fs = (s * 0.040).floor(),
        font = FONT_STACK,
        label = rarity.label().to_uppercase(),
        hashrate = hashrate_label,
        sub_y = (s * 0.114).floor(),
        sub_fs = (s * 0.028).floor(),
        id = id,
        serial = serial,
        badge_x = (s * 0.72).floor(),
        badge_y = (s * 0.028).floor(),
        badge_w = (s * 0.24).floor(),
        badge_h = (s * 0.085).floor(),
        badge_fill = badge_fill,
        badge_stroke = badge_stroke,
        badge_tx = (s * 0.12).floor(),
        badge_ty = (s * 0.060).floor(),
        badge_fs = (s * 0.036).floor(),
        badge_text = badge_text,
        device_ty = device_ty,
        device = device,
        frame_w = size.saturating_sub(36),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_document() {
        let a = card_svg(Rarity::Epic, 250, "8.25 GH/s", 335_292, 256);
        let b = card_svg(Rarity::Epic, 250, "8.25 GH/s", 335_292, 256);
        assert_eq!(a, b);
    }

    #[test]
    fn header_carries_label_and_badge() {
        let svg = card_svg(Rarity::Rare, 42, "1.25 GH/s", 56_196, 256);
        assert!(svg.contains("RARE &#8226; 1.25 GH/s"));
        assert!(svg.contains("#042 &#8226; 042-"));
        assert!(svg.contains(">RARE</text>"));
    }

    #[test]
    fn document_is_well_formed_enough() {
        let svg = card_svg(Rarity::Common, 7, "45.3 MH/s", 9_401, 128);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<svg").count(), 1, "layers must inline, not nest documents");
    }

    #[test]
    fn serial_is_seed_stable() {
        let a = card_svg(Rarity::Common, 7, "45.3 MH/s", 9_401, 128);
        let b = card_svg(Rarity::Common, 7, "45.3 MH/s", 9_401, 128);
        let serial = |svg: &str| {
            let at = svg.find("&#8226; 007-").map(|i| svg[i..i + 17].to_string());
            at.expect("serial line present")
        };
        assert_eq!(serial(&a), serial(&b));
    }
}
