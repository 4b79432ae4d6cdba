mod common;

mod tests {
    use myrtio_ring_composer::{Color, Rgb, interpolate, wheel};

    use crate::common::{BLACK, BLUE, GREEN, RED, WHITE};

    #[test]
    fn test_pack_unpack() {
        let color = Color::pack(0x12, 0x34, 0x56);
        assert_eq!(color.raw(), 0x0012_3456);
        assert_eq!(color.unpack(), (0x12, 0x34, 0x56));
        assert_eq!((color.r(), color.g(), color.b()), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_from_raw_discards_high_bits() {
        assert_eq!(Color::from_raw(0xFF12_3456), Color::pack(0x12, 0x34, 0x56));
        assert!(Color::from_raw(0xFF00_0000).is_black());
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb: Rgb = Color::pack(1, 2, 3).into();
        assert_eq!(rgb, Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(Color::from(rgb), Color::pack(1, 2, 3));
    }

    #[test]
    fn test_interpolate_endpoints() {
        let from = Color::pack(10, 200, 33);
        let to = Color::pack(250, 3, 180);
        assert_eq!(interpolate(from, to, 0.0), from);
        assert_eq!(interpolate(from, to, 1.0), to);
        assert_eq!(interpolate(WHITE, BLACK, 1.0), BLACK);
        assert_eq!(interpolate(BLACK, WHITE, 0.0), BLACK);
    }

    #[test]
    fn test_interpolate_equal_colors() {
        for color in [BLACK, WHITE, RED, Color::pack(17, 99, 201)] {
            for factor in [0.0, 0.1, 0.5, 0.9, 1.0, 2.5, -1.0] {
                assert_eq!(interpolate(color, color, factor), color);
            }
        }
    }

    #[test]
    fn test_interpolate_midpoint() {
        assert_eq!(
            interpolate(Color::pack(10, 20, 30), Color::pack(20, 0, 30), 0.5),
            Color::pack(15, 10, 30)
        );
    }

    #[test]
    fn test_interpolate_truncates_toward_zero() {
        // 25.5 and 229.5 are both cut, not rounded
        assert_eq!(interpolate(BLACK, WHITE, 0.1), Color::pack(25, 25, 25));
        assert_eq!(interpolate(WHITE, BLACK, 0.1), Color::pack(229, 229, 229));
        // 250 + 0.5 never reaches 251
        assert_eq!(
            interpolate(Color::pack(250, 0, 0), Color::pack(255, 0, 0), 0.1),
            Color::pack(250, 0, 0)
        );
    }

    #[test]
    fn test_interpolate_extrapolation_wraps() {
        // 200 + 50 * 2 = 300 -> 44
        assert_eq!(
            interpolate(Color::pack(200, 0, 0), Color::pack(250, 0, 0), 2.0),
            Color::pack(44, 0, 0)
        );
        // 50 - 50 * 2 = -50 -> 206
        assert_eq!(
            interpolate(Color::pack(0, 50, 0), BLACK, 2.0),
            Color::pack(0, 206, 0)
        );
    }

    #[test]
    fn test_wheel_primaries() {
        assert_eq!(wheel(0), RED);
        assert_eq!(wheel(85), GREEN);
        assert_eq!(wheel(170), BLUE);
        assert_eq!(wheel(255), RED);
    }

    #[test]
    fn test_wheel_is_continuous() {
        let step = |a: Color, b: Color| {
            let (r1, g1, b1) = a.unpack();
            let (r2, g2, b2) = b.unpack();
            r1.abs_diff(r2).max(g1.abs_diff(g2)).max(b1.abs_diff(b2))
        };
        for position in 0..=255u8 {
            let next = position.wrapping_add(1);
            assert!(
                step(wheel(position), wheel(next)) <= 3,
                "jump between {} and {}",
                position,
                next
            );
        }
    }

    #[test]
    fn test_wheel_keeps_full_intensity() {
        for position in 0..=255u8 {
            let (r, g, b) = wheel(position).unpack();
            assert_eq!(u16::from(r) + u16::from(g) + u16::from(b), 255);
        }
    }
}
