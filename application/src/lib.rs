pub mod codec;
pub mod dto;
pub mod error;
pub mod operation;
pub mod pagination;
pub mod registry;

pub use codec::WireCodec;
pub use dto::*;
pub use error::*;
pub use operation::{Operation, OPERATION_NAMES, TARGET_PREFIX};
pub use pagination::{next_page, PagedRequest, PagedResult};
pub use registry::{OperationRegistry, OperationRegistryBuilder};
