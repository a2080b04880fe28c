//! OSC 1.0 message encoding
//!
//! Only the two shapes the bridge emits are covered: one float32
//! argument and one int32 argument. Every field in an OSC packet is
//! padded to a four byte boundary; strings are null terminated and
//! numbers are big-endian.

/// A single-argument OSC message
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    /// OSC address pattern, e.g. `/ch/1`
    pub address: String,
    pub argument: OscArgument,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OscArgument {
    Float(f32),
    Int(i32),
}

impl OscMessage {
    /// Message carrying a float32 payload
    pub fn float(address: &str, value: f32) -> Self {
        Self {
            address: address.to_string(),
            argument: OscArgument::Float(value),
        }
    }

    /// Message carrying an int32 payload
    pub fn int(address: &str, value: i32) -> Self {
        Self {
            address: address.to_string(),
            argument: OscArgument::Int(value),
        }
    }

    /// Encode to the OSC 1.0 wire format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(self.address.len() + 12);

        push_padded_string(&mut packet, &self.address);
        match self.argument {
            OscArgument::Float(value) => {
                push_padded_string(&mut packet, ",f");
                packet.extend_from_slice(&value.to_be_bytes());
            }
            OscArgument::Int(value) => {
                push_padded_string(&mut packet, ",i");
                packet.extend_from_slice(&value.to_be_bytes());
            }
        }

        packet
    }
}

/// Append a null-terminated string padded to a four byte boundary
///
/// A string whose length is already a multiple of four still gets four
/// nulls; the terminator is mandatory.
fn push_padded_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
    let padding = 4 - s.len() % 4;
    out.extend(std::iter::repeat(0u8).take(padding));
}
