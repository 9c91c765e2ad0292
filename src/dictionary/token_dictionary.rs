use std::{
    fs::{
        self,
        File,
    },
    io::{
        BufReader,
        BufWriter,
        Read,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};

use liblzma::read::XzDecoder;
use serde::{
    Deserialize,
    Serialize,
};
use tar::Archive;
use tracing::{
    debug,
    info,
};
use vibrato::Dictionary;
use zstd::stream::copy_decode;

use crate::{
    core::{
        http::{
            get_with_retry,
            http_client,
        },
        YomikataError,
    },
    persistence::get_app_data_dir,
};

pub type ProgressCallback = Box<dyn Fn(String) + Send>;

const DIC_FILE: &str = "system.dic";
const COMPRESSED_DIC_FILE: &str = "system.dic.zst";
const LICENSE_FILES: [&str; 2] = ["BSD", "NOTICE"];

pub fn get_tokenizer_dict_dir() -> PathBuf {
    get_app_data_dir().join("dictionaries").join("tokenizer")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DictType {
    Unidic,
    #[default]
    Ipadic,
}

impl DictType {
    fn url(&self) -> &str {
        match self {
            DictType::Unidic => {
                "https://github.com/daac-tools/vibrato/releases/download/v0.5.0/bccwj-suw+unidic-cwj-3_1_1.tar.xz"
            }
            DictType::Ipadic => {
                "https://github.com/daac-tools/vibrato/releases/download/v0.5.0/ipadic-mecab-2_7_0.tar.xz"
            }
        }
    }

    pub fn folder_name(&self) -> &str {
        match self {
            DictType::Unidic => "bccwj-suw+unidic-cwj-3_1_1",
            DictType::Ipadic => "ipadic-mecab-2_7_0",
        }
    }

    /// Feature column holding the token's kana reading.
    pub fn reading_index(&self) -> usize {
        match self {
            DictType::Unidic => 20, // kana
            DictType::Ipadic => 7,  // 読み
        }
    }
}

/// Path of the system dictionary under `dict_dir`, whether or not it exists yet.
pub fn dictionary_path(dict_type: &DictType, dict_dir: &Path) -> PathBuf {
    dict_dir.join(dict_type.folder_name()).join(DIC_FILE)
}

pub fn ensure_dictionary(
    dict_type: &DictType,
    progress_callback: Option<ProgressCallback>,
) -> Result<PathBuf, YomikataError> {
    ensure_dictionary_in(dict_type, &get_tokenizer_dict_dir(), progress_callback)
}

/// Fetch the vibrato release for `dict_type` into `dict_dir` unless its
/// `system.dic` is already there.
pub fn ensure_dictionary_in(
    dict_type: &DictType,
    dict_dir: &Path,
    progress_callback: Option<ProgressCallback>,
) -> Result<PathBuf, YomikataError> {
    let dic_path = dictionary_path(dict_type, dict_dir);
    if dic_path.exists() {
        callback_message("Tokenizer dictionary already downloaded, loading...", &progress_callback);
        return Ok(dic_path);
    }

    callback_message(
        &format!("Downloading {} dictionary...", dict_type.folder_name()),
        &progress_callback,
    );
    let client = http_client()?;
    let response = get_with_retry(&client, dict_type.url())?;

    callback_message("Unpacking tokenizer dictionary...", &progress_callback);
    let target_dir = dict_dir.join(dict_type.folder_name());
    let installed = install_from_archive(response, &target_dir)?;

    callback_message("Tokenizer dictionary ready", &progress_callback);
    Ok(installed)
}

/// Stream a release `.tar.xz` into `target_dir`. `system.dic.zst` is decoded
/// straight to `system.dic` and the license files are copied next to it; every
/// other entry is skipped. `system.dic` only appears once fully written.
pub fn install_from_archive<R: Read>(
    archive: R,
    target_dir: &Path,
) -> Result<PathBuf, YomikataError> {
    fs::create_dir_all(target_dir)?;
    let dic_path = target_dir.join(DIC_FILE);
    let partial_path = target_dir.join(format!("{}.part", DIC_FILE));

    let mut archive = Archive::new(XzDecoder::new(BufReader::new(archive)));
    let mut found = false;

    for entry in archive.entries()? {
        let mut entry = entry?;
        let name = match entry.path()?.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_owned(),
            None => continue,
        };

        if name == COMPRESSED_DIC_FILE {
            let mut writer = BufWriter::new(File::create(&partial_path)?);
            let decoded = copy_decode(&mut entry, &mut writer).and_then(|_| writer.flush());
            if let Err(e) = decoded {
                drop(writer);
                fs::remove_file(&partial_path).ok();
                return Err(YomikataError::Custom(format!(
                    "Failed to decompress {}: {}. Possible corrupt download.",
                    COMPRESSED_DIC_FILE, e
                )));
            }
            found = true;
        } else if LICENSE_FILES.contains(&name.as_str()) {
            entry.unpack(target_dir.join(&name))?;
        } else {
            debug!(entry = %name, "skipping archive entry");
        }
    }

    if !found {
        return Err(YomikataError::Custom(format!(
            "{} not found in dictionary archive",
            COMPRESSED_DIC_FILE
        )));
    }

    fs::rename(&partial_path, &dic_path)?;
    debug!(path = %dic_path.display(), "dictionary installed");
    Ok(dic_path)
}

pub fn load_dictionary(path: &Path) -> Result<Dictionary, YomikataError> {
    let reader = BufReader::new(File::open(path)?);
    let dict = Dictionary::read(reader)?;
    Ok(dict)
}

fn callback_message(message: &str, callback: &Option<ProgressCallback>) {
    info!("{}", message);
    if let Some(ref cb) = callback {
        cb(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        Mutex,
    };

    use liblzma::write::XzEncoder;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("yomikata-{}-{}", name, uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A `.tar.xz` laid out like a vibrato release.
    fn release_archive(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        for (path, data) in files {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            builder.append_data(&mut header, path, *data).unwrap();
        }
        let tar_bytes = builder.into_inner().unwrap();

        let mut encoder = XzEncoder::new(Vec::new(), 6);
        encoder.write_all(&tar_bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn reading_columns() {
        assert_eq!(DictType::Ipadic.reading_index(), 7);
        assert_eq!(DictType::Unidic.reading_index(), 20);
        assert_eq!(DictType::default(), DictType::Ipadic);
    }

    #[test]
    fn existing_dictionary_short_circuits() {
        let dir = scratch_dir("dict");
        let path = dictionary_path(&DictType::Ipadic, &dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"stub").unwrap();

        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = messages.clone();
        let callback: ProgressCallback = Box::new(move |m| sink.lock().unwrap().push(m));

        let found = ensure_dictionary_in(&DictType::Ipadic, &dir, Some(callback)).unwrap();
        assert_eq!(found, path);
        assert_eq!(messages.lock().unwrap().len(), 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn archive_is_unpacked_in_one_pass() {
        let payload = b"vibrato system dictionary bytes".repeat(64);
        let compressed = zstd::encode_all(&payload[..], 0).unwrap();
        let archive = release_archive(&[
            ("ipadic-mecab-2_7_0/system.dic.zst", &compressed[..]),
            ("ipadic-mecab-2_7_0/BSD", &b"license text"[..]),
            ("ipadic-mecab-2_7_0/matrix.def", &b"1 1\n0 0 0\n"[..]),
        ]);

        let dir = scratch_dir("install");
        let target = dir.join(DictType::Ipadic.folder_name());
        let installed = install_from_archive(&archive[..], &target).unwrap();

        assert_eq!(installed, dictionary_path(&DictType::Ipadic, &dir));
        assert_eq!(fs::read(&installed).unwrap(), payload);
        assert_eq!(fs::read(target.join("BSD")).unwrap(), b"license text");
        assert!(!target.join("matrix.def").exists());
        assert!(!target.join("system.dic.part").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn archive_without_dictionary_is_rejected() {
        let archive = release_archive(&[("ipadic-mecab-2_7_0/NOTICE", &b"notice"[..])]);
        let dir = scratch_dir("no-dic");

        let err = install_from_archive(&archive[..], &dir).err().unwrap();
        assert!(matches!(err, YomikataError::Custom(_)));
        assert!(!dir.join(DIC_FILE).exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_dictionary_leaves_nothing_behind() {
        let archive = release_archive(&[("ipadic-mecab-2_7_0/system.dic.zst", &b"not zstd at all"[..])]);
        let dir = scratch_dir("corrupt");

        assert!(install_from_archive(&archive[..], &dir).is_err());
        assert!(!dir.join(DIC_FILE).exists());
        assert!(!dir.join("system.dic.part").exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn non_xz_input_is_an_error() {
        let dir = scratch_dir("not-xz");
        assert!(install_from_archive(&b"plain bytes"[..], &dir).is_err());
        assert!(!dir.join(DIC_FILE).exists());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn loading_a_missing_dictionary_is_an_io_error() {
        let dir = scratch_dir("missing");
        let err = load_dictionary(&dir.join(DIC_FILE)).err().unwrap();
        assert!(matches!(err, YomikataError::Io(_)));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn loading_garbage_is_a_vibrato_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join(DIC_FILE);
        fs::write(&path, b"not a dictionary").unwrap();
        assert!(load_dictionary(&path).is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
