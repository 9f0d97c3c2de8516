use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::LoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw program, big-endian opcodes without any header,
    /// stored as a u8 slice on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data
    pub fn new(name: &str, data: impl Into<Box<[u8]>>) -> Self {
        Rom {
            name: name.to_string(),
            data: data.into(),
        }
    }

    /// Will read the full rom from the given file, the name of the rom is the
    /// name of the file without its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|err| Self::map_io_error(path, err))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("read rom '{}' from {}", name, path.display());
        Ok(Rom::new(&name, data))
    }

    /// Will read the full rom from the reader.
    pub fn from_reader<R: Read>(name: &str, reader: &mut R) -> Result<Self, LoadError> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|err| Self::map_io_error(Path::new(name), err))?;
        Ok(Rom::new(name, data))
    }

    fn map_io_error(path: &Path, err: io::Error) -> LoadError {
        let path = PathBuf::from(path);
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Unreadable { path, source: err },
        }
    }

    /// Will return a slice internal values of the given data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::{build_opcode, Opcode};

    const RAW_ROM_DATA: [Opcode; 8] = [
        0x00E0, 0x6C00, 0x4C00, 0x6E0F, 0xA203, 0x6020, 0xF055, 0x00E0,
    ];

    fn raw_bytes() -> Vec<u8> {
        RAW_ROM_DATA
            .iter()
            .flat_map(|opcode| opcode.to_be_bytes().to_vec())
            .collect()
    }

    #[test]
    fn test_rom_from_reader() {
        let bytes = raw_bytes();
        let rom = Rom::from_reader("15PUZZLE", &mut &bytes[..]).unwrap();
        let data = rom.get_data();

        assert_eq!(rom.get_name(), "15PUZZLE");
        for i in (0..data.len()).step_by(2) {
            let opcode = build_opcode(data, i).unwrap();
            assert_eq!(RAW_ROM_DATA[i / 2], opcode);
        }
    }

    #[test]
    fn test_rom_from_file() {
        let path = std::env::temp_dir().join(format!("chip8-rom-{}.ch8", std::process::id()));
        fs::write(&path, raw_bytes()).unwrap();

        let rom = Rom::from_file(&path);
        fs::remove_file(&path).unwrap();

        let rom = rom.unwrap();
        assert_eq!(rom.get_name(), format!("chip8-rom-{}", std::process::id()));
        assert_eq!(rom.get_data(), &raw_bytes()[..]);
    }

    #[test]
    fn test_rom_missing_file() {
        let path = std::env::temp_dir().join("chip8-this-rom-does-not-exist.ch8");
        match Rom::from_file(&path) {
            Err(LoadError::NotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_rom_unreadable() {
        // a directory can be opened but not read
        let path = std::env::temp_dir();
        assert!(matches!(
            Rom::from_file(&path),
            Err(LoadError::Unreadable { .. })
        ));
    }
}
