//! The JDWP packet framing: the 11-byte header shared by every command,
//! reply and event, plus the handshake that precedes it on the wire.

use std::{fmt, fmt::Display};

use crate::{
    codec::{JdwpReadable, JdwpWritable},
    enums::ErrorCode,
};

/// The fixed 14-byte ASCII string both sides of a JDWP connection exchange
/// before any packet is sent.
pub const HANDSHAKE: &[u8; 14] = b"JDWP-Handshake";

/// Whether `bytes` is exactly the handshake string.
pub fn is_handshake(bytes: &[u8]) -> bool {
    bytes == HANDSHAKE
}

/// Patches the packet id (header bytes `4..8`) of an already-encoded packet
/// in place.
///
/// Lets a transport assign the real packet id right before sending without
/// re-encoding the body - [Codec::encode](crate::Codec::encode) always
/// writes packets with id 0.
///
/// # Panics
///
/// Panics if `bytes` is shorter than the 11-byte header.
pub fn write_id(bytes: &mut [u8], id: u32) {
    bytes[4..8].copy_from_slice(&id.to_be_bytes());
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, JdwpReadable, JdwpWritable)]
pub struct CommandId {
    command_set: u8,
    command: u8,
}

impl CommandId {
    pub(crate) const fn new(command_set: u8, command: u8) -> CommandId {
        CommandId {
            command_set,
            command,
        }
    }
}

impl Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.command_set, self.command)
    }
}

/// Event.Composite is the one command the target VM sends unprompted; it is
/// identified by this fixed command set/command pair.
const EVENT_COMPOSITE: CommandId = CommandId::new(64, 100);

#[derive(Debug, Copy, Clone, JdwpReadable, JdwpWritable)]
#[repr(u8)]
pub enum PacketMeta {
    Command(CommandId) = 0x00,
    Reply(ErrorCode) = 0x80,
}

#[derive(Debug, Copy, Clone, JdwpReadable, JdwpWritable)]
pub struct PacketHeader {
    length: u32,
    id: u32,
    meta: PacketMeta,
}

impl PacketHeader {
    pub const fn new(length: u32, id: u32, meta: PacketMeta) -> PacketHeader {
        PacketHeader { length, id, meta }
    }

    pub const fn length(&self) -> u32 {
        self.length
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn meta(&self) -> PacketMeta {
        self.meta
    }

    /// True if this packet is a reply to a command previously sent.
    pub const fn is_reply(&self) -> bool {
        matches!(self.meta, PacketMeta::Reply(_))
    }

    /// True if this packet is an unsolicited `Event.Composite` command.
    pub fn is_event(&self) -> bool {
        match self.meta {
            PacketMeta::Command(id) => id.command_set == EVENT_COMPOSITE.command_set
                && id.command == EVENT_COMPOSITE.command,
            PacketMeta::Reply(_) => false,
        }
    }
}

impl PacketHeader {
    pub(crate) const JDWP_SIZE: u32 = 4 + 4 + 1 + 2;
}
