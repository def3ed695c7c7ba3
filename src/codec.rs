use std::{
    io::{self, Error, ErrorKind, Read, Write},
    marker::PhantomData,
};

use byteorder::{ReadBytesExt, WriteBytesExt, BE};

pub use jdwp_macros::{JdwpReadable, JdwpWritable};

/// The five widths negotiated via `VirtualMachine::IDSizes` (command set 1,
/// command 7), in bytes. Must be negotiated before any other command that
/// carries an identifier is sent; the codec itself just threads this value
/// through every `JdwpReader`/`JdwpWriter` it constructs.
///
/// Defaults to all-8, the overwhelmingly common case for a 64-bit target,
/// so that the very first `IDSizes` request/reply (which carries no
/// identifiers) can round-trip before negotiation happens.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IdSizes {
    pub field_id_size: u32,
    pub method_id_size: u32,
    pub object_id_size: u32,
    pub reference_type_id_size: u32,
    pub frame_id_size: u32,
}

impl Default for IdSizes {
    fn default() -> Self {
        IdSizes {
            field_id_size: 8,
            method_id_size: 8,
            object_id_size: 8,
            reference_type_id_size: 8,
            frame_id_size: 8,
        }
    }
}

/// A [Read] wrapper that carries the session's [IdSizes] alongside the byte
/// stream, so that identifier newtypes know their own width without every
/// call site threading it through separately.
pub struct JdwpReader<R> {
    inner: R,
    pub(crate) id_sizes: IdSizes,
}

impl<R> JdwpReader<R> {
    pub fn new(inner: R, id_sizes: IdSizes) -> Self {
        JdwpReader { inner, id_sizes }
    }

    pub fn id_sizes(&self) -> IdSizes {
        self.id_sizes
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for JdwpReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// The [Write] counterpart of [JdwpReader].
pub struct JdwpWriter<W> {
    inner: W,
    pub(crate) id_sizes: IdSizes,
}

impl<W> JdwpWriter<W> {
    pub fn new(inner: W, id_sizes: IdSizes) -> Self {
        JdwpWriter { inner, id_sizes }
    }

    pub fn id_sizes(&self) -> IdSizes {
        self.id_sizes
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for JdwpWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Anything that can be decoded off a JDWP byte stream, given the session's
/// negotiated [IdSizes].
pub trait JdwpReadable: Sized {
    fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self>;
}

/// Anything that can be encoded onto a JDWP byte stream.
pub trait JdwpWritable {
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()>;
}

impl JdwpReadable for () {
    #[inline]
    fn read<R: Read>(_read: &mut JdwpReader<R>) -> io::Result<Self> {
        Ok(())
    }
}

impl JdwpWritable for () {
    #[inline]
    fn write<W: Write>(&self, _write: &mut JdwpWriter<W>) -> io::Result<()> {
        Ok(())
    }
}

impl JdwpReadable for bool {
    #[inline]
    fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
        Ok(read.read_u8()? != 0)
    }
}

impl JdwpWritable for bool {
    #[inline]
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        write.write_u8(*self as u8)
    }
}

impl JdwpReadable for u8 {
    #[inline]
    fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
        read.read_u8()
    }
}

impl JdwpWritable for u8 {
    #[inline]
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        write.write_u8(*self)
    }
}

macro_rules! impl_primitive {
    ($($tpe:ty => $read:ident, $write:ident;)*) => {
        $(
            impl JdwpReadable for $tpe {
                #[inline]
                fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
                    read.$read::<BE>()
                }
            }

            impl JdwpWritable for $tpe {
                #[inline]
                fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
                    write.$write::<BE>(*self)
                }
            }
        )*
    };
}

impl_primitive! {
    u16 => read_u16, write_u16;
    i16 => read_i16, write_i16;
    u32 => read_u32, write_u32;
    i32 => read_i32, write_i32;
    u64 => read_u64, write_u64;
    i64 => read_i64, write_i64;
    f32 => read_f32, write_f32;
    f64 => read_f64, write_f64;
}

impl JdwpReadable for String {
    fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
        let len = i32::read(read)?;
        let len = usize::try_from(len).map_err(|_| Error::from(ErrorKind::InvalidData))?;
        let mut bytes = vec![0; len];
        read.read_exact(&mut bytes)?;
        String::from_utf8(bytes).map_err(|_| Error::from(ErrorKind::InvalidData))
    }
}

impl JdwpWritable for str {
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        (self.len() as i32).write(write)?;
        write.write_all(self.as_bytes())
    }
}

impl JdwpWritable for String {
    #[inline]
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        self.as_str().write(write)
    }
}

impl<T: JdwpWritable + ?Sized> JdwpWritable for &T {
    #[inline]
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        (**self).write(write)
    }
}

impl<T: JdwpWritable> JdwpWritable for [T] {
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        (self.len() as i32).write(write)?;
        for item in self {
            item.write(write)?;
        }
        Ok(())
    }
}

impl<T: JdwpWritable, const N: usize> JdwpWritable for [T; N] {
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        self.as_slice().write(write)
    }
}

impl<T: JdwpReadable> JdwpReadable for Vec<T> {
    fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
        let len = i32::read(read)?;
        let len = usize::try_from(len).map_err(|_| Error::from(ErrorKind::InvalidData))?;
        let mut res = Vec::with_capacity(len.min(4096));
        for _ in 0..len {
            res.push(T::read(read)?);
        }
        Ok(res)
    }
}

impl<T: JdwpWritable> JdwpWritable for Vec<T> {
    #[inline]
    fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
        self.as_slice().write(write)
    }
}

impl<T> JdwpReadable for PhantomData<T> {
    #[inline]
    fn read<R: Read>(_read: &mut JdwpReader<R>) -> io::Result<Self> {
        Ok(PhantomData)
    }
}

impl<T> JdwpWritable for PhantomData<T> {
    #[inline]
    fn write<W: Write>(&self, _write: &mut JdwpWriter<W>) -> io::Result<()> {
        Ok(())
    }
}

macro_rules! impl_tuple {
    ($($t:ident),+) => {
        impl<$($t: JdwpReadable),+> JdwpReadable for ($($t,)+) {
            fn read<R: Read>(read: &mut JdwpReader<R>) -> io::Result<Self> {
                Ok(($($t::read(read)?,)+))
            }
        }

        #[allow(non_snake_case)]
        impl<$($t: JdwpWritable),+> JdwpWritable for ($($t,)+) {
            fn write<W: Write>(&self, write: &mut JdwpWriter<W>) -> io::Result<()> {
                let ($($t,)+) = self;
                $($t.write(write)?;)+
                Ok(())
            }
        }
    };
}

impl_tuple!(A, B);
impl_tuple!(A, B, C);

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: JdwpReadable + JdwpWritable + PartialEq + std::fmt::Debug>(value: T) {
        let mut buf = Vec::new();
        value
            .write(&mut JdwpWriter::new(&mut buf, IdSizes::default()))
            .unwrap();
        let decoded = T::read(&mut JdwpReader::new(buf.as_slice(), IdSizes::default())).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn primitives_round_trip() {
        round_trip(true);
        round_trip(false);
        round_trip(0x42u8);
        round_trip(0x1122u16);
        round_trip(-1i16);
        round_trip(0x1122_3344u32);
        round_trip(-123i32);
        round_trip(0x1122_3344_5566_7788u64);
        round_trip(-123456789i64);
        round_trip(1.0f32);
        round_trip(-0.0f64);
    }

    #[test]
    fn float_round_trip_preserves_nan_bit_pattern() {
        let mut buf = Vec::new();
        f32::NAN
            .write(&mut JdwpWriter::new(&mut buf, IdSizes::default()))
            .unwrap();
        let decoded = f32::read(&mut JdwpReader::new(buf.as_slice(), IdSizes::default())).unwrap();
        assert_eq!(decoded.to_bits(), f32::NAN.to_bits());
    }

    #[test]
    fn string_round_trips_and_advances_by_byte_length() {
        let s = "héllo, 世界".to_string();
        let mut buf = Vec::new();
        s.write(&mut JdwpWriter::new(&mut buf, IdSizes::default()))
            .unwrap();
        assert_eq!(buf.len(), 4 + s.len());
        let decoded =
            String::read(&mut JdwpReader::new(buf.as_slice(), IdSizes::default())).unwrap();
        assert_eq!(decoded, s);
    }

    #[test]
    fn empty_string_round_trips() {
        round_trip(String::new());
    }

    #[test]
    fn vec_round_trips() {
        round_trip(vec![1u32, 2, 3]);
        round_trip(Vec::<u32>::new());
    }

    #[test]
    fn insufficient_data_is_an_io_error() {
        let mut buf = Vec::new();
        42u32
            .write(&mut JdwpWriter::new(&mut buf, IdSizes::default()))
            .unwrap();
        buf.truncate(2);
        let err = u32::read(&mut JdwpReader::new(buf.as_slice(), IdSizes::default())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
