//! Message bundle serializers

pub mod xmb;
pub mod xml_helper;
