//! Writes an AMF0 ECMA array with its properties in a caller controlled order.
//!
//! `rml_amf0` represents associative values as a `HashMap`, which loses insertion order, so
//! only the individual property values are handed to it.

use byteorder::{BigEndian, WriteBytesExt};
use rml_amf0::Amf0Value;

use super::EncodingError;

const ECMA_ARRAY_MARKER: u8 = 0x08;
const OBJECT_END_MARKER: u8 = 0x09;
const UTF_8_EMPTY_MARKER: u16 = 0;

pub fn serialize(
    properties: Vec<(&'static str, Amf0Value)>,
    bytes: &mut Vec<u8>,
) -> Result<(), EncodingError> {
    bytes.write_u8(ECMA_ARRAY_MARKER)?;
    bytes.write_u32::<BigEndian>(properties.len() as u32)?;

    for (name, value) in properties {
        bytes.write_u16::<BigEndian>(name.len() as u16)?;
        bytes.extend(name.as_bytes());

        let encoded_value = rml_amf0::serialize(&vec![value])?;
        bytes.extend(encoded_value);
    }

    // ECMA arrays are terminated the same way objects are
    bytes.write_u16::<BigEndian>(UTF_8_EMPTY_MARKER)?;
    bytes.write_u8(OBJECT_END_MARKER)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::serialize;
    use byteorder::{BigEndian, WriteBytesExt};
    use rml_amf0::Amf0Value;

    #[test]
    fn can_serialize_empty_array() {
        let mut bytes = Vec::new();
        serialize(Vec::new(), &mut bytes).unwrap();

        assert_eq!(bytes, vec![0x08, 0, 0, 0, 0, 0, 0, 0x09]);
    }

    #[test]
    fn properties_are_written_in_given_order() {
        let properties = vec![
            ("b", Amf0Value::Boolean(true)),
            ("a", Amf0Value::Number(2.5)),
        ];

        let mut bytes = Vec::new();
        serialize(properties, &mut bytes).unwrap();

        let mut expected = vec![];
        expected.write_u8(0x08).unwrap();
        expected.write_u32::<BigEndian>(2).unwrap();
        expected.write_u16::<BigEndian>(1).unwrap();
        expected.extend(b"b");
        expected.write_u8(0x01).unwrap();
        expected.write_u8(1).unwrap();
        expected.write_u16::<BigEndian>(1).unwrap();
        expected.extend(b"a");
        expected.write_u8(0x00).unwrap();
        expected.write_f64::<BigEndian>(2.5).unwrap();
        expected.write_u16::<BigEndian>(0).unwrap();
        expected.write_u8(0x09).unwrap();

        assert_eq!(bytes, expected);
    }
}
