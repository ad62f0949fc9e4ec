//! Reed-Solomon error correction codewords.
//!
//! Polynomials are stored highest-order coefficient first. The generator keeps its
//! coefficients as [`Exponent`]s, the message being divided keeps them as [`Element`]s, and
//! each division step converts the leading term across.

use log::trace;

use crate::error::EncodeError;
use crate::gf256::{field, Element, Exponent};
use crate::version::Version;

/// The product of `(x - α^i)` for `i` in `0..degree`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GeneratorPolynomial {
    coefficients: Vec<Exponent>,
}

impl GeneratorPolynomial {
    pub fn new(degree: usize) -> Result<Self, EncodeError> {
        let gf = field();
        let mut coefficients = vec![Exponent::ZERO];
        for i in 0..degree {
            let root = Exponent::new(i)?;
            // Multiply by (x + α^i); the x term shifts, the constant term scales.
            let mut product = vec![Element::ZERO; coefficients.len() + 1];
            for (j, &c) in coefficients.iter().enumerate() {
                product[j] ^= gf.to_element(c);
                product[j + 1] ^= gf.to_element(c.mul(root));
            }
            coefficients = product
                .into_iter()
                .map(|v| gf.to_exponent(v))
                .collect::<Result<_, _>>()?;
        }
        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[Exponent] {
        &self.coefficients
    }

    /// Remainder of `data * x^degree` divided by this polynomial, as codewords.
    pub fn remainder(&self, data: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let gf = field();
        let mut message: Vec<Element> = data.iter().copied().map(Element::new).collect();
        message.resize(data.len() + self.degree(), Element::ZERO);

        for i in 0..data.len() {
            let lead = message[i];
            if lead.is_zero() {
                continue;
            }
            let factor = gf.to_exponent(lead)?;
            for (term, &g) in message[i..].iter_mut().zip(&self.coefficients) {
                *term ^= gf.to_element(g.mul(factor));
            }
            debug_assert!(message[i].is_zero());
        }
        Ok(message[data.len()..].iter().map(|e| e.value()).collect())
    }
}

/// One error correction block: a slice of the data codewords and its redundancy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Block {
    pub data: Vec<u8>,
    pub ecc: Vec<u8>,
}

/// Splits the padded data codewords into the blocks of `version` and computes each block's
/// error correction codewords.
pub fn compute_blocks(data: &[u8], version: Version) -> Result<Vec<Block>, EncodeError> {
    let layout = version.check_block_layout()?;
    if data.len() != usize::from(layout.total_data_codewords) {
        return Err(EncodeError::table(
            version.value(),
            format!(
                "got {} data codewords, expected {}",
                data.len(),
                layout.total_data_codewords
            ),
        ));
    }

    let generator = GeneratorPolynomial::new(layout.ecc_per_block.into())?;
    let mut rest = data;
    let mut blocks = Vec::with_capacity(layout.num_blocks());
    for len in layout.block_lengths() {
        let (chunk, tail) = rest.split_at(len);
        blocks.push(Block {
            data: chunk.to_vec(),
            ecc: generator.remainder(chunk)?,
        });
        rest = tail;
    }
    debug_assert!(rest.is_empty());
    trace!(
        "compute_blocks version={} blocks={} ecc_per_block={}",
        version.value(),
        blocks.len(),
        layout.ecc_per_block
    );
    Ok(blocks)
}
