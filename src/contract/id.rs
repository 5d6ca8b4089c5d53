//! ID Generation
//!
//! 生成 UUID v4 格式的标识符。使用非加密随机源，
//! 只适用于非安全场景，跨进程不保证唯一。

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const TEMPLATE: &[u8; 36] = b"xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";
const HEX: &[u8; 16] = b"0123456789abcdef";

/// 标识符生成器
///
/// 需要加密强度的场景应提供独立实现，而不是替换 [`RandomIdGenerator`]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// 基于 `SmallRng` 的默认生成器
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = SmallRng::from_rng(&mut rand::rng());
        fill_template(&mut rng)
    }
}

/// 生成一个 UUID v4 格式的字符串
pub fn generate_id() -> String {
    RandomIdGenerator.generate()
}

fn fill_template<R: Rng>(rng: &mut R) -> String {
    TEMPLATE
        .iter()
        .map(|&c| {
            let r: u8 = rng.random_range(0..16);
            match c {
                b'x' => char::from(HEX[usize::from(r)]),
                // variant 位: 8, 9, a, b
                b'y' => char::from(HEX[usize::from((r & 0x3) | 0x8)]),
                other => char::from(other),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_well_formed(id: &str) {
        let bytes = id.as_bytes();
        assert_eq!(bytes.len(), 36, "{id}");
        for (i, b) in bytes.iter().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(*b, b'-', "{id}"),
                14 => assert_eq!(*b, b'4', "{id}"),
                19 => assert!(matches!(b, b'8' | b'9' | b'a' | b'b'), "{id}"),
                _ => assert!(b.is_ascii_hexdigit() && !b.is_ascii_uppercase(), "{id}"),
            }
        }
    }

    #[test]
    fn test_generate_id_shape_and_uniqueness() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = generate_id();
            assert_well_formed(&id);
            assert!(seen.insert(id), "duplicate id");
        }
    }

    #[test]
    fn test_generate_id_parses_as_uuid_v4() {
        let id = generate_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = fill_template(&mut SmallRng::seed_from_u64(7));
        let b = fill_template(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_well_formed(&a);
    }
}
