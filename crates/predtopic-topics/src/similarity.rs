//! Similarity over sparse term weights.

use std::collections::HashMap;

/// Cosine similarity between two sparse term-weight vectors.
pub fn sparse_cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot_product: f64 = small
        .iter()
        .filter_map(|(term, x)| large.get(term).map(|y| x * y))
        .sum();
    let norm_a: f64 = a.values().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Normalize a vector so its entries sum to 1. Zero vectors are left alone.
pub fn normalize_sum(v: &mut [f64]) {
    let total: f64 = v.iter().sum();
    if total > 0.0 {
        for val in v.iter_mut() {
            *val /= total;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_cosine() {
        let a: HashMap<String, f64> = [("data".to_string(), 1.0), ("model".to_string(), 1.0)]
            .into_iter()
            .collect();
        let b: HashMap<String, f64> = [("data".to_string(), 2.0)].into_iter().collect();
        let sim = sparse_cosine(&a, &b);
        assert!((sim - 1.0 / 2f64.sqrt()).abs() < 1e-9);

        let c: HashMap<String, f64> = [("graph".to_string(), 1.0)].into_iter().collect();
        assert_eq!(sparse_cosine(&a, &c), 0.0);
        assert_eq!(sparse_cosine(&a, &HashMap::new()), 0.0);
    }

    #[test]
    fn test_normalize_sum() {
        let mut v = vec![1.0, 3.0];
        normalize_sum(&mut v);
        assert!((v[0] - 0.25).abs() < 1e-9);

        let mut zero = vec![0.0, 0.0];
        normalize_sum(&mut zero);
        assert_eq!(zero, vec![0.0, 0.0]);
    }
}
