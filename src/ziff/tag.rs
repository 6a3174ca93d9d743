use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;

use crate::ziff::{Result, ZiffError};

/// Known Ziff chunk tags.
///
/// Discriminants are the raw little-endian `u32` read from a chunk header, so
/// each tag's bytes on disk spell its four-letter name (`FORM` is stored as
/// `46 4F 52 4D`). The set is closed: any other value marks opaque payload
/// bytes rather than the start of a chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::IntoStaticStr)]
#[derive(strum::EnumString)]
#[derive(strum::EnumIter)]
#[derive(strum::EnumCount)]
#[derive(strum::VariantArray)]
#[derive(TryFromPrimitive)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[repr(u32)]
#[allow(missing_docs)]
pub enum ChunkType {
	Form = 0x4D52_4F46, // file root container

	// geometry
	Tgeo = 0x4F45_4754, // geometry object
	Tghd = 0x4448_4754, // geometry object header
	Tgpt = 0x5450_4754, // geometry vertex data
	Tgih = 0x4849_4754, // geometry instance header
	Tgin = 0x4E49_4754, // geometry instance
	Tmtb = 0x4254_4D54, // mesh material ids
	Mati = 0x4954_414D, // material
	Tgfm = 0x4D46_4754, // mesh triangle array
	Tgfp = 0x5046_4754, // collision triangle array
	Tida = 0x4144_4954, // float array
	Tgvp = 0x5056_4754, // vertex position array
	Tgvn = 0x4E56_4754, // vertex normal array
	Tgvc = 0x4356_4754, // vertex color array
	Tgvu = 0x5556_4754, // vertex uv array
	Tivu = 0x5556_4954, // vertex uv container
	Tivn = 0x4E56_4954, // vertex normal container
	Tivc = 0x4356_4954, // vertex color container
	Tii8 = 0x3849_4954, // 8-bit index array
	Tii6 = 0x3649_4954, // 16-bit index array

	// textures
	Txrh = 0x4852_5854, // texture resource header
	Tdds = 0x5344_4454, // dDS image
	Txpr = 0x5250_5854, // xPR image
	Tbmp = 0x504D_4254, // bMP image
	Tzmp = 0x504D_5A54, // zMP image
	Ttga = 0x4147_5454, // tGA image

	// geometry extras
	Tgtd = 0x4454_4754,
	Tgph = 0x4850_4754,
	Tglo = 0x4F4C_4754,
	Tgci = 0x4943_4754,
	Tgfe = 0x4546_4754,
	Tgfn = 0x4E46_4754,
	Tgfr = 0x5246_4754,
	Tgft = 0x5446_4754,
	Txrc = 0x4352_5854,
	Tgit = 0x5449_4754,
	Tifn = 0x4E46_4954,

	// world data
	Didf = 0x4644_4944,
	Grid = 0x4449_5247,
	Dlen = 0x4E45_4C44,
	Ofst = 0x5453_464F,
	Clen = 0x4E45_4C43,
	Name = 0x454D_414E,
	Zfsd = 0x4453_465A,
	Sdpt = 0x5450_4453,
	Sdtd = 0x4454_4453,
	Zpvs = 0x5356_505A,
	Pvsh = 0x4853_5650,
	Pvso = 0x4F53_5650,
	Zdyn = 0x4E59_445A,
	Ddef = 0x4645_4444,
	Dbdy = 0x5944_4244,
	Dcon = 0x4E4F_4344,
	Dbnc = 0x434E_4244,
	Mobo = 0x4F42_4F4D,
	Anim = 0x4D49_4E41,
	Defi = 0x4946_4544,
	Arot = 0x544F_5241,
	Atra = 0x4152_5441,
	Atrw = 0x5752_5441,
	Asca = 0x4143_5341,
	Acbh = 0x4842_4341,
	Acbd = 0x4442_4341,
	Acbi = 0x4942_4341,
	Zffd = 0x4446_465A,
	Zpec = 0x4345_505A,
	Zpeo = 0x4F45_505A,
	Zped = 0x4445_505A,
	Wsmc = 0x434D_5357,
	Wsmo = 0x4F4D_5357,
	Sdrd = 0x4452_4453,
	Zlit = 0x5449_4C5A,
	Lith = 0x4854_494C,
	Lito = 0x4F54_494C,

	// other sections
	Zlzo = 0x4F5A_4C5A,
	Zscd = 0x4443_535A,
	Zscr = 0x5243_535A,
	Zfph = 0x4850_465A,
	Zfpd = 0x4450_465A,
	Zfpt = 0x5450_465A,
}

impl ChunkType {
	pub fn from_raw(raw: u32) -> Option<Self> { // map a raw header value to a known tag
		Self::try_from_primitive(raw).ok()
	}

	pub fn is_known(raw: u32) -> bool { // return true when `raw` is one of the registered tags
		Self::from_raw(raw).is_some()
	}

	pub fn raw(self) -> u32 { // raw little-endian header value
		self as u32
	}

	pub fn fourcc(self) -> [u8; 4] { // tag bytes in file order
		self.raw().to_le_bytes()
	}

	pub fn as_str(self) -> &'static str { // four-letter tag name
		self.into()
	}

	pub fn parse_name(name: &str) -> Result<Self> { // parse a tag name, reporting failures as [`ZiffError::InvalidChunkType`]
		Self::from_str(name).map_err(|_| ZiffError::InvalidChunkType { name: name.to_owned() })
	}
}

impl fmt::Display for ChunkType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Render raw tag bytes as a printable label, replacing non-graphic bytes with `.`.
pub fn raw_tag_label(raw: u32) -> String {
	raw.to_le_bytes()
		.iter()
		.map(|byte| if byte.is_ascii_graphic() { char::from(*byte) } else { '.' })
		.collect()
}
