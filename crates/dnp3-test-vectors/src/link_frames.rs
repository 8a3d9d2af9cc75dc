//! Test vector types for link_frames.json
//!
//! Control byte, header block, and whole-frame vectors, valid and invalid,
//! plus the geometry constants they were computed from.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Constants {
    pub start_bytes: String,
    pub frame_min_len: u64,
    pub frame_max_len: u64,
    pub block_content_max: u64,
    pub block_wire_max: u64,
    pub header_content_len: u64,
    pub header_block_len: u64,
    pub len_field_min: u64,
    pub len_field_counted_header_bytes: u64,
    pub payload_max: u64,
    pub broadcast_address: u64,
    pub max_station_address: u64,
}

#[derive(Debug, Deserialize)]
pub struct ControlVector {
    pub description: String,
    pub direction: u64,
    pub prm: u64,
    pub fcb: Option<u64>,
    pub fcv: Option<u64>,
    pub dfc: Option<u64>,
    pub function_code: u64,
    pub control_byte: String,
    pub control_binary: String,
}

#[derive(Debug, Deserialize)]
pub struct InvalidControlVector {
    pub description: String,
    pub control_byte: String,
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct HeaderVector {
    pub description: String,
    pub content: String,
    pub block: String,
    pub len: u64,
    pub direction: u64,
    pub prm: u64,
    pub fcb: Option<u64>,
    pub fcv: Option<u64>,
    pub dfc: Option<u64>,
    pub function_code: u64,
    pub destination: u64,
    pub source: u64,
}

#[derive(Debug, Deserialize)]
pub struct FrameVector {
    pub description: String,
    pub raw: String,
    pub total_len: u64,
    pub declared_len: u64,
    pub control_byte: String,
    pub direction: u64,
    pub prm: u64,
    pub fcb: Option<u64>,
    pub fcv: Option<u64>,
    pub dfc: Option<u64>,
    pub function_code: u64,
    pub destination: u64,
    pub source: u64,
    pub payload: String,
    pub block_sizes: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct InvalidFrameVector {
    pub description: String,
    pub raw: String,
    pub error: String,
    pub block_index: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct LinkFrameVectors {
    pub description: String,
    pub source: String,
    pub constants: Constants,
    pub control_byte_layout: serde_json::Value,
    pub primary_function_values: BTreeMap<String, String>,
    pub secondary_function_values: BTreeMap<String, String>,
    pub fcv_required_function_codes: Vec<u64>,
    pub control_vectors: Vec<ControlVector>,
    pub invalid_control_vectors: Vec<InvalidControlVector>,
    pub header_vectors: Vec<HeaderVector>,
    pub frame_vectors: Vec<FrameVector>,
    pub invalid_frame_vectors: Vec<InvalidFrameVector>,
}

pub fn load() -> LinkFrameVectors {
    let json = include_str!("../../../.test-vectors/link_frames.json");
    serde_json::from_str(json).expect("Failed to deserialize link_frames.json")
}
