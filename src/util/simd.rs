//! SIMD helpers for text normalization and dense vector arithmetic.
//!
//! Vector routines process eight `f32` lanes at a time with the `wide`
//! crate and finish the remainder with scalar code.

/// ASCII fast paths for string normalization.
pub mod ascii {
    /// Lowercase ASCII input byte-wise in 8-byte chunks.
    pub fn to_lowercase_optimized(input: &str) -> String {
        let bytes = input.as_bytes();
        let mut result = Vec::with_capacity(bytes.len());

        let chunks = bytes.chunks_exact(8);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let mut processed = [0u8; 8];
            for (i, &byte) in chunk.iter().enumerate() {
                processed[i] = byte.to_ascii_lowercase();
            }
            result.extend_from_slice(&processed);
        }

        result.extend(remainder.iter().map(u8::to_ascii_lowercase));

        // Only ASCII bytes change, so the buffer stays valid UTF-8.
        String::from_utf8(result)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }

    /// Lowercase any input, choosing the ASCII fast path when possible.
    pub fn to_lowercase(input: &str) -> String {
        if input.is_ascii() && input.len() >= 16 {
            to_lowercase_optimized(input)
        } else {
            input.to_lowercase()
        }
    }
}

/// Dense `f32` vector arithmetic.
pub mod numeric {
    use wide::f32x8;

    const LANES: usize = 8;

    fn load(chunk: &[f32]) -> f32x8 {
        f32x8::new([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ])
    }

    /// Dot product of two equal-length vectors.
    ///
    /// Extra elements of the longer slice are ignored; callers check lengths.
    pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
        let len = a.len().min(b.len());
        let (a, b) = (&a[..len], &b[..len]);

        let mut sum = f32x8::splat(0.0);
        for (ca, cb) in a.chunks_exact(LANES).zip(b.chunks_exact(LANES)) {
            sum += load(ca) * load(cb);
        }

        let mut result: f32 = sum.to_array().iter().sum();
        let tail = len - len % LANES;
        for i in tail..len {
            result += a[i] * b[i];
        }

        result
    }

    /// Euclidean norm of a vector.
    pub fn magnitude(vector: &[f32]) -> f32 {
        dot_product(vector, vector).sqrt()
    }

    /// Add `other` into `acc` element-wise.
    pub fn add_assign(acc: &mut [f32], other: &[f32]) {
        let len = acc.len().min(other.len());
        let tail = len - len % LANES;

        for start in (0..tail).step_by(LANES) {
            let summed = load(&acc[start..start + LANES]) + load(&other[start..start + LANES]);
            acc[start..start + LANES].copy_from_slice(&summed.to_array());
        }
        for i in tail..len {
            acc[i] += other[i];
        }
    }

    /// Multiply every element of `vector` by `factor` in place.
    pub fn scale(vector: &mut [f32], factor: f32) {
        let factor_vec = f32x8::splat(factor);
        let len = vector.len();
        let tail = len - len % LANES;

        for start in (0..tail).step_by(LANES) {
            let scaled = load(&vector[start..start + LANES]) * factor_vec;
            vector[start..start + LANES].copy_from_slice(&scaled.to_array());
        }
        for value in &mut vector[tail..] {
            *value *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lowercase() {
        assert_eq!(ascii::to_lowercase("Hello"), "hello");
        assert_eq!(
            ascii::to_lowercase("THE APOLLO 11 MISSION'S GOAL"),
            "the apollo 11 mission's goal"
        );
        assert_eq!(ascii::to_lowercase("ÄRGER"), "ärger");
    }

    #[test]
    fn test_dot_product_and_magnitude() {
        let a: Vec<f32> = (1..=11).map(|x| x as f32).collect();
        let b = vec![1.0f32; 11];

        assert_eq!(numeric::dot_product(&a, &b), 66.0);
        assert!((numeric::magnitude(&[3.0, 4.0]) - 5.0).abs() < 1e-6);
        assert_eq!(numeric::magnitude(&[]), 0.0);
    }

    #[test]
    fn test_add_assign_and_scale() {
        let mut acc = vec![1.0f32; 10];
        let other: Vec<f32> = (0..10).map(|x| x as f32).collect();

        numeric::add_assign(&mut acc, &other);
        assert_eq!(acc[0], 1.0);
        assert_eq!(acc[9], 10.0);

        numeric::scale(&mut acc, 0.5);
        assert_eq!(acc[0], 0.5);
        assert_eq!(acc[8], 4.5);
        assert_eq!(acc[9], 5.0);
    }
}
