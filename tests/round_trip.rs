// Copyright (C) 2026 pixveil developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Round-trip tests through the public API.

use image::Rgba;
use pixveil::{decode, encode, PixelOp, TransformConfig, TransformError};

/// Pixel data shaped like a small gradient image, 16x16.
fn sample_image() -> Vec<Rgba<u8>> {
    (0..16u8)
        .flat_map(|y| (0..16u8).map(move |x| Rgba([x * 16, y * 16, x ^ y, 255])))
        .collect()
}

#[test]
fn worked_xor_example() {
    let cfg = TransformConfig {
        op: Some(PixelOp::Xor),
        key: Some(5),
        shuffle_seed: None,
    };
    let enc = encode(vec![Rgba([10, 20, 30, 255])], &cfg).unwrap();
    assert_eq!(enc, vec![Rgba([15, 17, 27, 255])]);
    assert_eq!(decode(enc, &cfg).unwrap(), vec![Rgba([10, 20, 30, 255])]);
}

#[test]
fn round_trip_all_config_shapes() {
    let configs = [
        TransformConfig {
            op: Some(PixelOp::Xor),
            key: Some(0x5a),
            shuffle_seed: None,
        },
        TransformConfig {
            op: Some(PixelOp::Add),
            key: Some(200),
            shuffle_seed: Some(77),
        },
        TransformConfig {
            op: Some(PixelOp::Sub),
            key: Some(255),
            shuffle_seed: Some(0),
        },
        TransformConfig {
            op: None,
            key: None,
            shuffle_seed: Some(u64::MAX),
        },
        TransformConfig::default(),
    ];

    let original = sample_image();
    for cfg in configs {
        let enc = encode(original.clone(), &cfg).unwrap();
        assert_eq!(enc.len(), original.len());
        assert_eq!(decode(enc, &cfg).unwrap(), original, "config: {cfg:?}");
    }
}

#[test]
fn encode_actually_changes_the_image() {
    let cfg = TransformConfig {
        op: Some(PixelOp::Xor),
        key: Some(0xff),
        shuffle_seed: Some(42),
    };
    let original = sample_image();
    assert_ne!(encode(original.clone(), &cfg).unwrap(), original);
}

#[test]
fn decrypt_with_wrong_seed_does_not_recover() {
    let original = sample_image();
    let enc = encode(
        original.clone(),
        &TransformConfig {
            op: None,
            key: None,
            shuffle_seed: Some(1),
        },
    )
    .unwrap();
    let dec = decode(
        enc,
        &TransformConfig {
            op: None,
            key: None,
            shuffle_seed: Some(2),
        },
    )
    .unwrap();
    assert_ne!(dec, original);
}

#[test]
fn missing_key_rejected_before_processing() {
    let cfg = TransformConfig {
        op: Some(PixelOp::Add),
        key: None,
        shuffle_seed: None,
    };
    assert_eq!(
        encode(sample_image(), &cfg),
        Err(TransformError::MissingKey)
    );
}
