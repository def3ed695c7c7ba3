//! Header invariants, handshake, and packet classification - the concrete
//! scenarios from the wire-format spec, encoded through [Codec] alone, no
//! transport involved.

use jdwp::{
    codec::IdSizes,
    commands::virtual_machine::{Exit, IDSizes, Suspend, Version},
    protocol::{is_handshake, write_id, HANDSHAKE},
    Codec,
};

fn codec() -> Codec {
    Codec::new(IdSizes::default())
}

#[test]
fn handshake_bytes_are_the_fixed_ascii_string() {
    assert_eq!(HANDSHAKE, b"JDWP-Handshake");
    assert!(is_handshake(HANDSHAKE));
}

#[test]
fn handshake_rejects_anything_else() {
    assert!(!is_handshake(b"JDWP-Handshakr"));
    assert!(!is_handshake(b"too short"));
    assert!(!is_handshake(b""));
}

#[test]
fn idsizes_command_packet_matches_the_wire_spec() {
    let bytes = codec().encode(0, &IDSizes);
    assert_eq!(
        bytes,
        [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x07]
    );
}

#[test]
fn suspend_command_packet_matches_the_wire_spec() {
    let bytes = codec().encode(0, &Suspend);
    assert_eq!(
        bytes,
        [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x08]
    );
}

#[test]
fn exit_command_packet_matches_the_wire_spec() {
    let bytes = codec().encode(0, &Exit::new(42));
    assert_eq!(
        bytes,
        [
            0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0A, 0x00, 0x00, 0x00,
            0x2A
        ]
    );
}

#[test]
fn header_length_matches_buffer_length_for_every_encode() {
    for bytes in [
        codec().encode(7, &Version),
        codec().encode(7, &Suspend),
        codec().encode(7, &Exit::new(-1)),
    ] {
        let length = u32::from_be_bytes(bytes[0..4].try_into().unwrap());
        assert_eq!(length as usize, bytes.len());
        assert_eq!(bytes[8], 0x00, "command packets set flags to 0x00");
        // bytes 9..11 are the declared (cmdSet, cmdID) for a command packet
    }
}

#[test]
fn write_id_patches_the_packet_id_without_touching_the_body() {
    let mut bytes = codec().encode(0, &Exit::new(42));
    write_id(&mut bytes, 0xAABBCCDD);
    assert_eq!(bytes[4..8], [0xAA, 0xBB, 0xCC, 0xDD]);
    // length and body are untouched
    assert_eq!(bytes[0..4], [0x00, 0x00, 0x00, 0x0F]);
    assert_eq!(bytes[8..], [0x00, 0x01, 0x0A, 0x00, 0x00, 0x00, 0x2A]);
}

#[test]
fn class_by_signature_string_length_prefix_and_total_packet_length() {
    use jdwp::commands::virtual_machine::ClassesBySignature;

    let bytes = codec().encode(0, &ClassesBySignature::new("Ljava/lang/String;"));
    assert_eq!(bytes.len(), 11 + 4 + 18);
    assert_eq!(bytes[0..4], [0x00, 0x00, 0x00, 0x21]);
    assert_eq!(bytes[9..11], [0x01, 0x02]);
}
