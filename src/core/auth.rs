use hex::ToHex;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 32;

pub fn hash_password(pass: &str, slt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pass);
    hasher.update(slt);
    hasher.finalize().encode_hex()
}

pub fn random_salt() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(SALT_LEN).map(char::from).collect()
}

pub fn verify_password(pass: &str, slt: &str, hashed: &str) -> bool {
    hash_password(pass, slt) == hashed
}
