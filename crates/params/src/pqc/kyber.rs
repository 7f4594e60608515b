//! Constants for Kyber key encapsulation mechanism

/// Kyber polynomial degree
pub const KYBER_N: usize = 256;

/// Kyber modulus
pub const KYBER_Q: u16 = 3329;

/// Size of seeds, messages, coins and hashes in bytes
pub const KYBER_SYM_BYTES: usize = 32;

/// Size of the shared secret in bytes
pub const KYBER_SS_BYTES: usize = 32;

/// Size of a polynomial serialized with 12 bits per coefficient
pub const KYBER_POLY_BYTES: usize = 384;

/// Bytes squeezed from SHAKE-128 per matrix cell before rejection sampling
pub const KYBER_GEN_MATRIX_BYTES: usize = 672;

/// Kyber parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KyberParameterSet {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (dimension)
    pub k: usize,

    /// Noise parameter for the secret and key-generation error
    pub eta1: u8,

    /// Noise parameter for the encryption errors
    pub eta2: u8,

    /// Bits per coefficient of the compressed vector `bp`
    pub du: usize,

    /// Bits per coefficient of the compressed polynomial `v`
    pub dv: usize,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of the IND-CPA secret key in bytes
    pub cpa_secret_key_size: usize,

    /// Size of the KEM secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

impl KyberParameterSet {
    /// Size of the serialized polynomial vector (12 bits per coefficient)
    pub const fn polyvec_bytes(&self) -> usize {
        self.k * KYBER_POLY_BYTES
    }

    /// Size of the compressed polynomial `v`
    pub const fn poly_compressed_bytes(&self) -> usize {
        self.dv * KYBER_N / 8
    }

    /// Size of the compressed polynomial vector `bp`
    pub const fn polyvec_compressed_bytes(&self) -> usize {
        self.k * self.du * KYBER_N / 8
    }
}

/// Kyber-512 parameters
pub const KYBER512: KyberParameterSet = KyberParameterSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 2,
    eta1: 3,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 800,
    cpa_secret_key_size: 768,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: KYBER_SS_BYTES,
};

/// Kyber-768 parameters
pub const KYBER768: KyberParameterSet = KyberParameterSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 3,
    eta1: 2,
    eta2: 2,
    du: 10,
    dv: 4,
    public_key_size: 1184,
    cpa_secret_key_size: 1152,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: KYBER_SS_BYTES,
};

/// Kyber-1024 parameters
pub const KYBER1024: KyberParameterSet = KyberParameterSet {
    n: KYBER_N,
    q: KYBER_Q,
    k: 4,
    eta1: 2,
    eta2: 2,
    du: 11,
    dv: 5,
    public_key_size: 1568,
    cpa_secret_key_size: 1536,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: KYBER_SS_BYTES,
};

// The byte sizes above are written out for readability; keep them honest.
const _: () = {
    let sets = [KYBER512, KYBER768, KYBER1024];
    let mut i = 0;
    while i < sets.len() {
        let p = sets[i];
        assert!(p.public_key_size == p.polyvec_bytes() + KYBER_SYM_BYTES);
        assert!(p.cpa_secret_key_size == p.polyvec_bytes());
        assert!(
            p.secret_key_size == p.cpa_secret_key_size + p.public_key_size + 2 * KYBER_SYM_BYTES
        );
        assert!(p.ciphertext_size == p.polyvec_compressed_bytes() + p.poly_compressed_bytes());
        i += 1;
    }
};
