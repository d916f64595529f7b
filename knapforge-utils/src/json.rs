use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_value, Map, Value};
use std::io::{Read, Write};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

// Canonical form: object keys sorted recursively, including objects nested
// inside arrays. Seeds derived from this string depend on it being stable.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    let value = to_value(obj).expect("to_value failed on serializable object");
    to_string(&sort_keys(&value)).expect("to_string failed on serializable object")
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&obj[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

pub fn compress_obj<T>(obj: &T) -> Vec<u8>
where
    T: Serialize,
{
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(jsonify(obj).as_bytes())
        .expect("write to in-memory zlib encoder failed");
    encoder.finish().expect("zlib encoder finish failed")
}

pub fn decompress_obj<T>(input: &[u8]) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let mut decoder = ZlibDecoder::new(input);
    let mut json_str = String::new();
    decoder.read_to_string(&mut json_str)?;
    Ok(dejsonify(&json_str)?)
}
