use std::{
    fmt,
    fmt::Debug,
    io::{self, Read},
    marker::PhantomData,
    ops::Deref,
};

use crate::{
    codec::{JdwpReadable, JdwpReader, JdwpWritable, JdwpWriter},
    enums::*,
    functional::{Coll, Single},
    jvm::{FieldModifiers, MethodModifiers, TypeModifiers},
    protocol::CommandId,
    types::*,
};

pub(crate) use jdwp_macros::jdwp_command;

/// A single JDWP command, tying its wire identity (command set + command)
/// to the reply type it decodes into.
pub trait Command {
    const ID: CommandId;
    type Output;
}

pub mod virtual_machine;

pub mod reference_type;

pub mod class_type;

pub mod array_type;

pub mod interface_type;

pub mod method;

pub mod field;

pub mod object_reference;

pub mod string_reference;

pub mod thread_reference;

pub mod thread_group_reference;

pub mod array_reference;

pub mod class_loader_reference;

pub mod event_request;

pub mod stack_frame;

pub mod class_object_reference;

pub mod event;
