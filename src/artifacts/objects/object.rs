use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use bytes::Bytes;

pub trait Packable {
    fn serialize(&self) -> Bytes;
}

pub trait Unpackable {
    fn deserialize(content: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_id(&self) -> ObjectId {
        ObjectId::hash(&self.serialize())
    }
}

impl<T: Packable> Object for T {}
