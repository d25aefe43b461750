use crate::error::CodecError;

/// Regroup `data` from `from`-bit values into `to`-bit values.
///
/// With `pad = true` (encoding direction) leftover bits are left-shifted
/// into one final padded group. With `pad = false` (decoding direction)
/// leftover bits must be fewer than `from` and all zero, otherwise the
/// input was not produced by a padded conversion and decoding fails with
/// `CodecError::Padding`.
pub(crate) fn convert_bits(
    data: &[u8],
    from: u32,
    to: u32,
    pad: bool,
) -> Result<Vec<u8>, CodecError> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for &value in data {
        acc = (acc << from) | u32::from(value);
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(CodecError::Padding);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_20_bytes() {
        let data: Vec<u8> = (0..20).collect();
        let five = convert_bits(&data, 8, 5, true).unwrap();
        let eight = convert_bits(&five, 5, 8, false).unwrap();
        assert_eq!(eight, data);
    }

    #[test]
    fn pads_partial_group() {
        // 0xFF = 11111111 -> 11111, 11100 (3 leftover bits shifted up)
        let five = convert_bits(&[0xFF], 8, 5, true).unwrap();
        assert_eq!(five, vec![31, 28]);
    }

    #[test]
    fn nonzero_padding_rejected() {
        // 11111, 11101: the trailing 3-bit remainder 101 is nonzero
        let result = convert_bits(&[31, 29], 5, 8, false);
        assert_eq!(result, Err(CodecError::Padding));
    }

    #[test]
    fn excess_leftover_bits_rejected() {
        // A single 5-bit group leaves a full unconsumed input group.
        let result = convert_bits(&[0], 5, 8, false);
        assert_eq!(result, Err(CodecError::Padding));
    }

    #[test]
    fn empty_input() {
        assert_eq!(convert_bits(&[], 8, 5, true).unwrap(), Vec::<u8>::new());
        assert_eq!(convert_bits(&[], 5, 8, false).unwrap(), Vec::<u8>::new());
    }
}
