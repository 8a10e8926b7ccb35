// Fixed-size values read out of property buffers
//
// Property data arrives as raw native-endian bytes. Each fixed-size type knows
// its width, the value a buffer holds before the registry writes into it, and
// how to move itself in and out of bytes.

use super::object_id::AudioObjectId;

/// A value with a fixed byte width that can be decoded from a property buffer.
pub trait PlainValue: Copy {
    const SIZE: usize;

    /// What an unwritten buffer slot decodes to
    fn unset() -> Self;

    /// `out` is exactly `SIZE` bytes
    fn write_bytes(&self, out: &mut [u8]);

    /// `bytes` is exactly `SIZE` bytes
    fn read_bytes(bytes: &[u8]) -> Self;
}

macro_rules! plain_number {
    ($($ty:ty),*) => {
        $(
            impl PlainValue for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn unset() -> Self {
                    0 as $ty
                }

                fn write_bytes(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

plain_number!(u32, i32, f64);

impl PlainValue for AudioObjectId {
    const SIZE: usize = 4;

    fn unset() -> Self {
        AudioObjectId::UNKNOWN
    }

    fn write_bytes(&self, out: &mut [u8]) {
        self.raw().write_bytes(out);
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        AudioObjectId::from_raw(u32::read_bytes(bytes))
    }
}

/// `AudioStreamBasicDescription`
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StreamFormat {
    pub sample_rate: f64,
    pub format_id: u32,
    pub format_flags: u32,
    pub bytes_per_packet: u32,
    pub frames_per_packet: u32,
    pub bytes_per_frame: u32,
    pub channels_per_frame: u32,
    pub bits_per_channel: u32,
    pub reserved: u32,
}

impl PlainValue for StreamFormat {
    const SIZE: usize = 40;

    fn unset() -> Self {
        StreamFormat::default()
    }

    fn write_bytes(&self, out: &mut [u8]) {
        self.sample_rate.write_bytes(&mut out[0..8]);
        let words = [
            self.format_id,
            self.format_flags,
            self.bytes_per_packet,
            self.frames_per_packet,
            self.bytes_per_frame,
            self.channels_per_frame,
            self.bits_per_channel,
            self.reserved,
        ];
        for (chunk, word) in out[8..].chunks_exact_mut(4).zip(words) {
            word.write_bytes(chunk);
        }
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        let word = |index: usize| u32::read_bytes(&bytes[8 + index * 4..12 + index * 4]);
        StreamFormat {
            sample_rate: f64::read_bytes(&bytes[0..8]),
            format_id: word(0),
            format_flags: word(1),
            bytes_per_packet: word(2),
            frames_per_packet: word(3),
            bytes_per_frame: word(4),
            channels_per_frame: word(5),
            bits_per_channel: word(6),
            reserved: word(7),
        }
    }
}

/// Encodes a value into a fresh `SIZE`-byte buffer.
pub fn to_bytes<T: PlainValue>(value: T) -> Vec<u8> {
    let mut out = vec![0u8; T::SIZE];
    value.write_bytes(&mut out);
    out
}
