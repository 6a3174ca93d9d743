use crate::ziff::{ChunkNode, ChunkType, MAX_DEPTH_LIMIT, ReadOptions, ZiffError, parse_tree, parse_tree_with};
use crate::ziff::test_support::chunk;

fn assert_well_formed(node: &ChunkNode<'_>) {
	assert_eq!(node.payload_end() - node.payload_offset, node.declared_size as usize);

	let mut prev_end = node.payload_offset;
	for child in &node.children {
		assert!(child.header_offset() >= prev_end, "children overlap or are out of order");
		assert!(child.payload_end() <= node.payload_end(), "child escapes parent payload");
		prev_end = child.payload_end();
		assert_well_formed(child);
	}
}

#[test]
fn form_with_single_geometry_leaf() {
	let bytes = chunk(b"FORM", &chunk(b"TGEO", &[0_u8; 8]));
	assert_eq!(bytes.len(), 24);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert_eq!(tree.root.tag, ChunkType::Form);
	assert_eq!(tree.root.declared_size, 16);
	assert_eq!(tree.root.children.len(), 1);

	let child = &tree.root.children[0];
	assert_eq!(child.tag, ChunkType::Tgeo);
	assert_eq!(child.header_offset(), 8);
	assert_eq!(child.payload_offset, 16);
	assert_eq!(child.payload.len(), 8);
	assert!(child.is_leaf());
	assert_eq!(tree.trailing_len(), 0);
}

#[test]
fn root_larger_than_buffer_is_out_of_bounds() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(b"FORM");
	bytes.extend_from_slice(&100_u32.to_le_bytes());
	bytes.extend_from_slice(&[0_u8; 50]);

	let err = parse_tree(&bytes).expect_err("short root fails");
	assert!(matches!(err, ZiffError::OutOfBounds { at: 8, need: 100, rem: 50 }));
	assert!(!err.is_malformed());
}

#[test]
fn short_tail_after_child_is_absorbed() {
	let mut payload = chunk(b"TGHD", &[0_u8; 4]);
	payload.extend_from_slice(&[1, 2, 3]);
	let bytes = chunk(b"FORM", &payload);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert_eq!(tree.root.children.len(), 1);
	assert_eq!(tree.root.payload.len(), 15);
	assert_eq!(tree.root.payload_end(), bytes.len());
}

#[test]
fn unknown_leading_tag_yields_no_children_and_full_extent() {
	let mut payload = b"JUNK".to_vec();
	payload.extend_from_slice(&[0_u8; 4]);
	payload.extend_from_slice(&chunk(b"TGEO", &[0_u8; 8]));
	let bytes = chunk(b"FORM", &payload);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert!(tree.root.children.is_empty());
	assert_eq!(tree.root.declared_size as usize, payload.len());
	assert_eq!(tree.root.payload_end(), bytes.len());
}

#[test]
fn unknown_tag_after_child_stops_scan() {
	let mut payload = chunk(b"TGHD", &[0_u8; 4]);
	payload.extend_from_slice(&chunk(b"JUNK", &[0_u8; 4]));
	payload.extend_from_slice(&chunk(b"TGPT", &[0_u8; 4]));
	let bytes = chunk(b"FORM", &payload);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert_eq!(tree.root.children.len(), 1);
	assert_eq!(tree.root.children[0].tag, ChunkType::Tghd);
}

#[test]
fn nested_geometry_keeps_file_order_and_repeated_tags() {
	let mut geo = chunk(b"TGHD", &[0_u8; 12]);
	geo.extend_from_slice(&chunk(b"TGPT", &[0_u8; 4]));
	geo.extend_from_slice(&chunk(b"TGPT", &[0_u8; 6]));
	let mut payload = chunk(b"TGEO", &geo);
	payload.extend_from_slice(&chunk(b"TXRH", &[0_u8; 2]));
	let bytes = chunk(b"FORM", &payload);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert_well_formed(&tree.root);

	let tags: Vec<_> = tree.walk().map(|(depth, node)| (depth, node.tag)).collect();
	assert_eq!(
		tags,
		vec![
			(0, ChunkType::Form),
			(1, ChunkType::Tgeo),
			(2, ChunkType::Tghd),
			(2, ChunkType::Tgpt),
			(2, ChunkType::Tgpt),
			(1, ChunkType::Txrh),
		]
	);

	let geo_node = tree.root.first(ChunkType::Tgeo).expect("geometry exists");
	let sizes: Vec<_> = geo_node.all(ChunkType::Tgpt).map(|node| node.declared_size).collect();
	assert_eq!(sizes, vec![4, 6]);
}

#[test]
fn reparse_yields_identical_tree() {
	let mut payload = chunk(b"TGEO", &chunk(b"TGVP", &[0_u8; 16]));
	payload.extend_from_slice(&chunk(b"MATI", &[0_u8; 8]));
	let bytes = chunk(b"FORM", &payload);

	let first = parse_tree(&bytes).expect("first parse");
	let second = parse_tree(&bytes).expect("second parse");
	assert_eq!(first, second);
}

#[test]
fn opaque_payload_scan_terminates() {
	let bytes = chunk(b"FORM", &[0xFF_u8; 64]);

	let tree = parse_tree(&bytes).expect("tree parses");
	assert!(tree.root.children.is_empty());
	assert_eq!(tree.root.payload.len(), 64);
}

#[test]
fn zero_sized_child_is_recognized() {
	let bytes = chunk(b"FORM", &chunk(b"TGHD", &[]));

	let tree = parse_tree(&bytes).expect("tree parses");
	assert_eq!(tree.root.children.len(), 1);
	assert!(tree.root.children[0].payload.is_empty());
}

#[test]
fn nesting_past_depth_limit_is_malformed() {
	let bytes = chunk(b"FORM", &chunk(b"TGEO", &chunk(b"TGEO", &chunk(b"TGEO", &[]))));

	let options = ReadOptions {
		max_depth: 2,
		..ReadOptions::default()
	};
	let err = parse_tree_with(&bytes, options).expect_err("depth 3 exceeds limit");
	assert!(matches!(err, ZiffError::DepthLimitExceeded { at: 24, max_depth: 2 }));
	assert!(err.is_malformed());

	let options = ReadOptions {
		max_depth: 3,
		..ReadOptions::default()
	};
	let tree = parse_tree_with(&bytes, options).expect("depth 3 is allowed");
	assert_eq!(tree.root.descendant_count(), 3);
}

#[test]
fn child_overrunning_parent_is_malformed() {
	let mut inner = Vec::new();
	inner.extend_from_slice(b"TGEO");
	inner.extend_from_slice(&12_u32.to_le_bytes());
	inner.extend_from_slice(&[0_u8; 8]);
	let mut bytes = chunk(b"FORM", &inner);
	bytes.extend_from_slice(&[0_u8; 4]);

	let err = parse_tree(&bytes).expect_err("child escapes root");
	assert!(matches!(
		err,
		ZiffError::ChildOverrunsParent {
			at: 8,
			end: 28,
			parent_end: 24
		}
	));
}

#[test]
fn child_overrunning_buffer_is_out_of_bounds() {
	let mut inner = Vec::new();
	inner.extend_from_slice(b"TGEO");
	inner.extend_from_slice(&12_u32.to_le_bytes());
	inner.extend_from_slice(&[0_u8; 8]);
	let bytes = chunk(b"FORM", &inner);

	let err = parse_tree(&bytes).expect_err("child escapes buffer");
	assert!(matches!(err, ZiffError::OutOfBounds { at: 16, need: 12, rem: 8 }));
}

#[test]
fn short_or_empty_buffer_is_truncated_root() {
	assert!(matches!(parse_tree(&[]), Err(ZiffError::TruncatedRoot { len: 0 })));
	assert!(matches!(parse_tree(b"FORM\0"), Err(ZiffError::TruncatedRoot { len: 5 })));
}

#[test]
fn unknown_root_tag_is_reported() {
	let bytes = chunk(b"RIFF", &[0_u8; 4]);

	let err = parse_tree(&bytes).expect_err("unknown root fails");
	assert!(matches!(err, ZiffError::UnknownRootTag { tag } if tag == u32::from_le_bytes(*b"RIFF")));
}

#[test]
fn trailing_bytes_depend_on_options() {
	let mut bytes = chunk(b"FORM", &chunk(b"TGEO", &[]));
	bytes.extend_from_slice(&[0xAB, 0xCD]);

	let tree = parse_tree(&bytes).expect("lenient parse");
	assert_eq!(tree.trailing_len(), 2);

	let strict = ReadOptions {
		allow_trailing: false,
		..ReadOptions::default()
	};
	let err = parse_tree_with(&bytes, strict).expect_err("strict parse fails");
	assert!(matches!(err, ZiffError::TrailingBytes { at: 16, len: 2 }));
}

#[test]
fn oversized_depth_ceiling_is_clamped() {
	let mut bytes = chunk(b"TGEO", &[]);
	for _ in 0..2000 {
		bytes = chunk(b"TGEO", &bytes);
	}
	let bytes = chunk(b"FORM", &bytes);

	let options = ReadOptions {
		max_depth: u32::MAX,
		..ReadOptions::default()
	};
	let err = parse_tree_with(&bytes, options).expect_err("chain deeper than the hard cap fails");
	assert!(matches!(err, ZiffError::DepthLimitExceeded { max_depth, .. } if max_depth == MAX_DEPTH_LIMIT));
	assert!(err.is_malformed());
}
