use sha2::{Digest, Sha256};

/// True iff SHA-256 of the decimal concatenation `"{last_proof}{proof}"`
/// starts with `difficulty` zero hex characters.
pub fn valid_proof(last_proof: u64, proof: u64, difficulty: usize) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest.bytes().take(difficulty).all(|b| b == b'0')
}

/// Brute-force search for the smallest proof satisfying the puzzle against
/// `last_proof`.
///
/// CPU-bound and unbounded (expected ~16^difficulty hash evaluations); run it
/// on a blocking thread, never on an async request worker.
pub fn proof_of_work(last_proof: u64, difficulty: usize) -> u64 {
    let mut proof = 0u64;
    while !valid_proof(last_proof, proof, difficulty) {
        proof += 1;
    }
    proof
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    #[test]
    fn search_finds_a_proof_with_four_zero_prefix() {
        let proof = proof_of_work(100, 4);
        assert!(valid_proof(100, proof, 4));

        let mut hasher = Sha256::new();
        hasher.update(format!("100{proof}").as_bytes());
        let digest = hex::encode(hasher.finalize());
        assert!(digest.starts_with("0000"));
    }

    #[test]
    fn search_returns_the_smallest_proof() {
        let proof = proof_of_work(100, 2);
        for earlier in 0..proof {
            assert!(!valid_proof(100, earlier, 2));
        }
    }

    #[test]
    fn difficulty_zero_accepts_everything() {
        assert!(valid_proof(1, 1, 0));
        assert_eq!(proof_of_work(1, 0), 0);
    }

    #[test]
    fn valid_at_higher_difficulty_implies_valid_at_lower() {
        let proof = proof_of_work(100, 3);
        assert!(valid_proof(100, proof, 2));
        assert!(valid_proof(100, proof, 1));
    }
}
