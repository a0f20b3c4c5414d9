//! # Dictionary
//!
//! Herein is support for dictionary construction and loading. All runtime
//! operations are performed against a [`Dictionary`], which answers membership
//! queries from a hash set and prefix queries from a prefix tree. The search
//! routines treat it as an opaque set of strings.

use std::{
	collections::HashSet,
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{debug, trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A set of valid words. Duplicate insertions collapse, so the dictionary has
/// strict set semantics regardless of its source.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary
{
	/// The words, for constant-time membership tests.
	words: HashSet<String>,

	/// The same words, for prefix tests.
	prefixes: PrefixTreeSet<String>
}

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self::default() }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.words.is_empty() }

	/// The number of distinct words in the dictionary.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.words.len() }

	/// Check if the dictionary contains the given word.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

	/// Check if the dictionary contains a word with the given prefix. If this
	/// answers `false`, then no extension of `prefix` is a word.
	///
	/// # Arguments
	///
	/// * `prefix` - The prefix to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains a word with the given prefix, `false`
	/// otherwise.
	#[inline]
	#[must_use]
	pub fn contains_prefix(&self, prefix: &str) -> bool
	{
		self.prefixes.contains_prefix(prefix)
	}

	/// Insert a single word, verbatim.
	///
	/// # Arguments
	///
	/// * `word` - The word to insert.
	///
	/// # Returns
	///
	/// `true` if the word was not already present, `false` otherwise.
	pub fn insert(&mut self, word: &str) -> bool
	{
		if self.words.insert(word.to_string())
		{
			self.prefixes.insert(word.to_string());
			true
		}
		else
		{
			false
		}
	}

	/// Populate the dictionary with the given words. Words are inserted
	/// verbatim; use [`read_from_file`](Self::read_from_file) for normalized
	/// loading.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			self.insert(word.as_ref());
		}
	}

	/// Iterate over the words in lexicographic order. The order is fixed, so
	/// anything derived from it is deterministic.
	///
	/// # Returns
	///
	/// The sorted words.
	#[must_use]
	pub fn sorted(&self) -> Vec<&str>
	{
		let mut words = self.words.iter()
			.map(String::as_str)
			.collect::<Vec<_>>();
		words.sort_unstable();
		words
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, a text file will be
	/// read and a binary dictionary will be created (to optimize future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the binary file contains invalid data, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Any failure to stat either file means the cache can't be trusted, so
		// fall back to the text file.
		let cache_is_fresh = dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false);
		if cache_is_fresh
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			debug!(
				"Read binary dictionary: {} ({} words)",
				dict_path.display(),
				dictionary.len()
			);
			return Ok(dictionary)
		}
		let dictionary = Self::read_from_file(&txt_path)?;
		debug!(
			"Read text dictionary: {} ({} words)",
			txt_path.display(),
			dictionary.len()
		);
		match dictionary.serialize_to_file(&dict_path)
		{
			Ok(_) => trace!("Wrote binary dictionary: {}", dict_path.display()),
			Err(e) => warn!(
				"Failed to write binary dictionary: {}: {}",
				dict_path.display(),
				e
			)
		}
		Ok(dictionary)
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word. Surrounding whitespace is
	/// trimmed, letters are upper-cased to match the board, and blank lines
	/// are skipped.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let mut dictionary = Self::new();
		for line in reader.lines()
		{
			if let Some(word) = normalize(&line?)
			{
				dictionary.insert(&word);
			}
		}
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary deserialized from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be created or written, an error is returned.
	/// * If serialization fails, an [`ErrorKind::InvalidData`] is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let content = bincode::serialize(self)
			.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
		let mut file = File::create(path)?;
		file.write_all(&content)?;
		Ok(())
	}
}

impl<T: AsRef<str>> FromIterator<T> for Dictionary
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self
	{
		let mut dictionary = Self::new();
		for word in iter
		{
			dictionary.insert(word.as_ref());
		}
		dictionary
	}
}

/// Normalize a line of a word list.
///
/// # Arguments
///
/// * `line` - The raw line.
///
/// # Returns
///
/// The upper-cased, trimmed word, or `None` if the line is blank.
fn normalize(line: &str) -> Option<String>
{
	let word = line.trim();
	if word.is_empty() { None } else { Some(word.to_uppercase()) }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::ErrorKind};

	use crate::dictionary::Dictionary;
	use tempfile::{tempdir, NamedTempFile};

	/// The path to the dictionary file.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str { "dict/boggle.txt" }

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	/// * [`Dictionary::contains_prefix`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("HELLO"));
		dictionary.populate(&["HELLO", "WORLD", "HELLO"]);
		assert_eq!(dictionary.len(), 2);
		assert!(dictionary.contains("HELLO"));
		assert!(dictionary.contains("WORLD"));
		assert!(!dictionary.contains("HELL"));
		assert!(dictionary.contains_prefix("HELL"));
		assert!(dictionary.contains_prefix("WOR"));
		assert!(!dictionary.contains_prefix("WOX"));
		assert_eq!(dictionary.sorted(), vec!["HELLO", "WORLD"]);
	}

	/// The empty word is an ordinary member when inserted explicitly.
	#[test]
	fn test_empty_word()
	{
		let dictionary = ["", "A"].into_iter().collect::<Dictionary>();
		assert_eq!(dictionary.len(), 2);
		assert!(dictionary.contains(""));
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		assert!(!dictionary.is_empty());
		// These words had better be in the dictionary…
		assert!(dictionary.contains("HELLO"));
		assert!(dictionary.contains("WORLD"));
		assert!(!dictionary.contains(""));
	}

	/// Ensure that the loader trims, upper-cases, deduplicates, and skips
	/// blank lines.
	#[test]
	fn test_read_normalizes()
	{
		let file = NamedTempFile::new().unwrap();
		fs::write(file.path(), "cat\n  Dog \r\n\nCAT\n\t\n").unwrap();
		let dictionary = Dictionary::read_from_file(file.path()).unwrap();
		assert_eq!(dictionary.sorted(), vec!["CAT", "DOG"]);
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	/// A corrupt binary dictionary is reported as invalid data.
	#[test]
	fn test_deserialize_garbage()
	{
		let file = NamedTempFile::new().unwrap();
		fs::write(file.path(), [0xFF; 3]).unwrap();
		let error = Dictionary::deserialize_from_file(file.path()).unwrap_err();
		assert_eq!(error.kind(), ErrorKind::InvalidData);
	}

	/// Ensure that opening a dictionary writes the binary cache, and that the
	/// cache answers identically on the next open.
	#[test]
	fn test_open_writes_cache()
	{
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("tiny.txt"), "ab\nabd\nad\n").unwrap();
		let first = Dictionary::open(dir.path(), "tiny").unwrap();
		assert!(dir.path().join("tiny.dict").exists());
		let second = Dictionary::open(dir.path(), "tiny").unwrap();
		assert_eq!(first, second);
		assert_eq!(second.sorted(), vec!["AB", "ABD", "AD"]);
	}

	/// A missing text file is an I/O error, not a panic.
	#[test]
	fn test_open_missing()
	{
		let dir = tempdir().unwrap();
		let error = Dictionary::open(dir.path(), "absent").unwrap_err();
		assert_eq!(error.kind(), ErrorKind::NotFound);
	}
}
