// Hardware object registry access
//
// Layers, leaves first:
// - object_id: opaque handles with the unknown/system sentinels
// - property_address: selector/scope/element triples and the codes we use
// - registry: the injected probe/fetch capability
// - property_reader: generic two-phase typed reads
// - objects: named reads (process list, PID translation, running state, ...)
pub mod error;
pub mod object_id;
pub mod objects;
pub mod property_address;
pub mod property_reader;
pub mod registry;
pub mod types;

pub use error::{format_osstatus_error, HardwareError, OSStatus};
pub use object_id::AudioObjectId;
pub use objects::HardwareObjects;
pub use property_address::PropertyAddress;
pub use property_reader::{ArrayOf, Flag, PropertyReader, PropertyShape, Qualifier, Scalar, Text};
pub use registry::HardwareRegistry;
pub use types::{PlainValue, StreamFormat};

pub type Result<T> = std::result::Result<T, HardwareError>;
