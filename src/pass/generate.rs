//! Password generation.

use log::debug;
use rand::Rng;

use super::{Alphabet, GenerationOptions, Password};
use crate::error::GenerateError;

/// Generate a single password from `options`, drawing from `rng`.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    let alphabet = validated(options)?;
    sample(&alphabet, options.length, rng)
}

/// Generate `count` passwords with the same options. Validation happens once.
pub fn generate_batch<R: Rng + ?Sized>(
    options: &GenerationOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, GenerateError> {
    let alphabet = validated(options)?;
    debug!("generating {count} password(s)");

    let mut passwords = Vec::new();
    passwords
        .try_reserve(count)
        .map_err(|_| GenerateError::TooMany(count))?;
    for _ in 0..count {
        passwords.push(sample(&alphabet, options.length, rng)?);
    }
    Ok(passwords)
}

fn validated(options: &GenerationOptions) -> Result<Alphabet, GenerateError> {
    let alphabet = Alphabet::build(options);
    if alphabet.is_empty() {
        return Err(GenerateError::Configuration);
    }
    debug!(
        "alphabet ({} chars): {}",
        alphabet.len(),
        alphabet.iter().collect::<String>()
    );
    Ok(alphabet)
}

/// Alphabet characters are ASCII, so `length` bytes hold the whole password.
fn sample<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    let chars = alphabet.as_slice();
    let mut buf = String::new();
    buf.try_reserve_exact(length)
        .map_err(|_| GenerateError::TooLong(length))?;
    buf.extend((0..length).map(|_| chars[rng.gen_range(0..chars.len())]));

    debug_assert!(buf.chars().all(|c| alphabet.contains(c)));
    Ok(Password(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{AMBIGUOUS, SYMBOLS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn length_and_membership() {
        let mut rng = rng();
        for length in [1, 12, 64, 500] {
            let options = GenerationOptions {
                length,
                ..Default::default()
            };
            let alphabet = Alphabet::build(&options);
            let pass = generate(&options, &mut rng).unwrap();
            assert_eq!(pass.len(), length);
            assert!(pass.as_str().chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_password() {
        let options = GenerationOptions::default();
        let a = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&options, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let c = generate(&options, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn avoids_ambiguous_characters() {
        let options = GenerationOptions {
            length: 2000,
            ..Default::default()
        };
        let pass = generate(&options, &mut rng()).unwrap();
        assert!(!pass.as_str().chars().any(|c| AMBIGUOUS.contains(&c)));
    }

    #[test]
    fn ambiguous_characters_allowed_when_not_filtered() {
        let options = GenerationOptions {
            length: 2000,
            include_lower: false,
            include_symbols: false,
            avoid_ambiguous: false,
            ..Default::default()
        };
        let pass = generate(&options, &mut rng()).unwrap();
        // 36 candidates, 4 of them ambiguous: 2000 draws cannot plausibly miss all of them
        assert!(pass.as_str().chars().any(|c| AMBIGUOUS.contains(&c)));
    }

    #[test]
    fn no_classes_is_a_configuration_error() {
        let options = GenerationOptions {
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
            ..Default::default()
        };
        assert_eq!(
            generate(&options, &mut rng()),
            Err(GenerateError::Configuration)
        );
        assert_eq!(
            generate_batch(&options, 3, &mut rng()).err(),
            Some(GenerateError::Configuration)
        );
    }

    #[test]
    fn digits_only_with_filter_succeeds() {
        let options = GenerationOptions {
            length: 100,
            include_upper: false,
            include_lower: false,
            include_symbols: false,
            ..Default::default()
        };
        let pass = generate(&options, &mut rng()).unwrap();
        assert_eq!(pass.len(), 100);
        assert!(pass.as_str().chars().all(|c| ('2'..='9').contains(&c)));
    }

    #[test]
    fn symbols_only_with_filter_succeeds() {
        let options = GenerationOptions {
            length: 40,
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: true,
            avoid_ambiguous: true,
        };
        let pass = generate(&options, &mut rng()).unwrap();
        assert_eq!(pass.len(), 40);
        assert!(pass.as_str().chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn zero_length_is_empty() {
        let options = GenerationOptions {
            length: 0,
            ..Default::default()
        };
        let pass = generate(&options, &mut rng()).unwrap();
        assert!(pass.is_empty());
        assert_eq!(pass.as_str(), "");
    }

    #[test]
    fn huge_length_is_an_error_not_a_panic() {
        let options = GenerationOptions {
            length: usize::MAX,
            ..Default::default()
        };
        assert_eq!(
            generate(&options, &mut rng()),
            Err(GenerateError::TooLong(usize::MAX))
        );
        assert_eq!(
            generate_batch(&options, 2, &mut rng()).err(),
            Some(GenerateError::TooLong(usize::MAX))
        );
    }

    #[test]
    fn huge_count_is_an_error_not_a_panic() {
        let options = GenerationOptions::default();
        assert_eq!(
            generate_batch(&options, usize::MAX, &mut rng()).err(),
            Some(GenerateError::TooMany(usize::MAX))
        );
    }

    #[test]
    fn batch_is_deterministic_and_sized() {
        let options = GenerationOptions::default();
        let a = generate_batch(&options, 5, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_batch(&options, 5, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.len(), 5);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn batch_first_matches_single_generation() {
        let options = GenerationOptions::default();
        let batch = generate_batch(&options, 1, &mut StdRng::seed_from_u64(3)).unwrap();
        let single = generate(&options, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(batch[0], single);
    }
}
