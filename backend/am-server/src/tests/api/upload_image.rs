use crate::api::assets::upload_image::sanitize_file_name;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_plain_name_when_sanitized_then_unchanged() {
    assert_that!(sanitize_file_name("laptop.png"), eq("laptop.png"));
}

#[test]
fn given_path_segments_when_sanitized_then_last_segment_kept() {
    assert_that!(sanitize_file_name("../../etc/passwd"), eq("passwd"));
    assert_that!(sanitize_file_name("C:\\Users\\me\\desk.jpg"), eq("desk.jpg"));
}

#[test]
fn given_trailing_slash_when_sanitized_then_empty() {
    assert_that!(sanitize_file_name("photos/"), eq(""));
}
