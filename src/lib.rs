#![allow(dead_code)]

extern crate self as jdwp;

use std::io;

use thiserror::Error;

use crate::{
    codec::{IdSizes, JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    commands::Command,
    protocol::{PacketHeader, PacketMeta},
};

pub mod codec;
pub mod commands;
pub mod enums;
pub mod event_modifier;
pub mod functional;
pub mod jvm;
pub mod protocol;
pub mod types;

pub use protocol::CommandId;

/// Errors the codec itself can raise while decoding a reply or event body.
///
/// These are implementation/transport failures, never JDWP protocol error
/// codes - those travel in the reply header's [PacketMeta::Reply] and are
/// left for the caller to interpret.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid tag byte: {0:#x}")]
    InvalidTag(u8),
    #[error("invalid event kind: {0}")]
    InvalidEventType(u8),
    #[error("unexpected type")]
    UnexpectedType,
}

/// Encodes and decodes JDWP packets for a session with a fixed set of
/// negotiated [IdSizes].
#[derive(Debug, Copy, Clone, Default)]
pub struct Codec {
    id_sizes: IdSizes,
}

impl Codec {
    pub fn new(id_sizes: IdSizes) -> Self {
        Codec { id_sizes }
    }

    /// Encodes a complete command packet: header (with the given packet id)
    /// followed by the command's body, with the length prefix patched in
    /// afterwards.
    ///
    /// A transport that needs to reassign the packet id later (e.g. to retry
    /// a send under a fresh correlation id) can do so in place with
    /// [`protocol::write_id`] instead of re-encoding the body.
    pub fn encode<C: Command + JdwpWritable>(&self, id: u32, command: &C) -> Vec<u8> {
        log::trace!("encoding command {:?} as packet {id}", C::ID);
        let header = PacketHeader::new(0, id, PacketMeta::Command(C::ID));

        let mut buf = Vec::new();
        let mut writer = JdwpWriter::new(&mut buf, self.id_sizes);
        header
            .write(&mut writer)
            .expect("writing to a Vec<u8> never fails");
        command
            .write(&mut writer)
            .expect("writing to a Vec<u8> never fails");

        let length = (buf.len() as u32).to_be_bytes();
        buf[0..4].copy_from_slice(&length);
        buf
    }

    /// Decodes a reply body (everything after the 11-byte header) for a
    /// given command type.
    pub fn decode_reply<C: Command>(&self, bytes: &[u8]) -> Result<C::Output, CodecError>
    where
        C::Output: JdwpReadable,
    {
        let mut reader = JdwpReader::new(bytes, self.id_sizes);
        Ok(C::Output::read(&mut reader)?)
    }

    /// Decodes an `Event.Composite` body.
    pub fn decode_event(&self, bytes: &[u8]) -> Result<commands::event::Composite, CodecError> {
        let mut reader = JdwpReader::new(bytes, self.id_sizes);
        commands::event::Composite::read(&mut reader).map_err(|err| {
            if err.kind() == io::ErrorKind::InvalidData {
                log::debug!("event packet carried an unrecognized eventKind");
                CodecError::InvalidEventType(0)
            } else {
                CodecError::Io(err)
            }
        })
    }
}
