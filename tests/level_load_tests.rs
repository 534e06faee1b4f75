// tests/level_load_tests.rs

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use macroquad::prelude::*;
use tilegrid::{decode_level_file_to_ir, CollisionFilter, Level, TileError};

mod common;
use common::Blank;

fn write_level(name: &str, json: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("tilegrid_{}_{}.json", name, std::process::id()));
    fs::write(&path, json).unwrap();
    path
}

const CAVE: &str = r#"
{
  "window": { "title": "Cave" },
  "tile_size": 16,
  "tiles": [
    { "code": ".", "name": "Air" },
    { "code": "X", "name": "Rock", "image": "rock.png" }
  ],
  "rows": [
    "XXXXX",
    "X...X",
    "XXXXX"
  ]
}
"#;

#[test]
fn decoded_level_builds_a_collidable_grid() {
    let path = write_level("cave", CAVE);
    let (ir, base) = decode_level_file_to_ir(path.to_str().unwrap()).expect("decode");
    assert_eq!(base, std::env::temp_dir());
    assert_eq!(ir.window.title, "Cave");

    let images = HashMap::from([("rock.png".to_owned(), Blank(vec2(16.0, 16.0)))]);
    let level = Level::from_parts(ir, &images).expect("build");
    fs::remove_file(&path).unwrap();

    let map = &level.tilemap;
    assert_eq!(map.tiles().count(), 15);
    assert_eq!(map.tiles().filter(|t| t.has_rect()).count(), 12);

    // A probe inside the open middle touches nothing
    let inside = Rect::new(20.0, 20.0, 8.0, 8.0);
    assert!(map.collision_test(&inside, &CollisionFilter::default()).is_empty());

    // Covering the whole cave hits every rock
    let all = Rect::new(0.0, 0.0, 80.0, 48.0);
    assert_eq!(map.collision_test(&all, &CollisionFilter::default()).len(), 12);
    assert!(map
        .collision_test(&all, &CollisionFilter::default().ignore_name("Rock"))
        .is_empty());
}

#[test]
fn unknown_row_code_is_rejected_before_images_load() {
    let json = CAVE.replace("X...X", "X.?.X");
    let path = write_level("unknown", &json);
    let err = decode_level_file_to_ir(path.to_str().unwrap()).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(
        err,
        TileError::UnknownCode {
            row: 1,
            col: 2,
            code: '?'
        }
    ));
}

#[test]
fn error_messages_name_the_problem() {
    let err = decode_level_file_to_ir("level.yaml").unwrap_err();
    assert!(err.to_string().contains("level.yaml"));

    let err = TileError::UnknownCode {
        row: 3,
        col: 4,
        code: 'z',
    };
    assert_eq!(err.to_string(), "Unknown tile code 'z' at row 3, column 4");
}

#[test]
fn reused_tile_name_is_rejected_at_decode() {
    let json = CAVE.replace(
        r#"{ "code": ".", "name": "Air" }"#,
        r#"{ "code": ".", "name": "Rock", "image": "other.png" }"#,
    );
    let path = write_level("dup_name", &json);
    let err = decode_level_file_to_ir(path.to_str().unwrap()).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, TileError::DuplicateName(ref n) if n == "Rock"));
}
