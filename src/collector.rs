use std::fs;
use std::path::PathBuf;

use bzip2::read::BzDecoder;
use chrono::{Duration, Utc};
use lazy_static::lazy_static;
use scraper::{Html, Selector};

const SERIAL_2_URL: &str = "http://data.caida.org/datasets/as-relationships/serial-2/";

lazy_static! {
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();
}

/// Downloads and caches a CAIDA serial-2 relationship snapshot.
pub struct CaidaRelationshipCollector {
    /// How far back the target snapshot date lies
    pub days_ago: u32,

    /// Where decompressed snapshots are cached between runs
    pub cache_dir: PathBuf,
}

impl CaidaRelationshipCollector {
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("astopology");
        CaidaRelationshipCollector {
            days_ago: 10,
            cache_dir,
        }
    }

    pub fn with_days_ago(mut self, days_ago: u32) -> Self {
        self.days_ago = days_ago;
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    pub fn run(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        fs::create_dir_all(&self.cache_dir)?;

        let cached_path = self.cached_path();
        if cached_path.exists() {
            println!("Using cached CAIDA data from {:?}", cached_path);
            return Ok(cached_path);
        }

        println!("Downloading CAIDA AS relationship data...");
        let url = self.find_snapshot_url()?;
        let bz2_data = self.download_file(&url)?;
        let decompressed = self.decompress_bz2(&bz2_data)?;
        fs::write(&cached_path, decompressed)?;

        println!("CAIDA data saved to {:?}", cached_path);
        Ok(cached_path)
    }

    // Serial-2 snapshots are monthly, stamped with the first of the month.
    fn month_stamp(&self) -> String {
        let date = Utc::now() - Duration::days(self.days_ago as i64);
        date.format("%Y%m01").to_string()
    }

    fn cached_path(&self) -> PathBuf {
        let filename = format!("caida_as_rel_{}.txt", self.month_stamp());
        self.cache_dir.join(filename)
    }

    // Scans the index page for the snapshot matching the target month.
    fn find_snapshot_url(&self) -> Result<String, Box<dyn std::error::Error>> {
        let stamp = self.month_stamp();
        let index = reqwest::blocking::get(SERIAL_2_URL)?.text()?;
        let document = Html::parse_document(&index);

        for anchor in document.select(&ANCHOR_SELECTOR) {
            if let Some(href) = anchor.value().attr("href") {
                if href.contains(&stamp) && href.ends_with(".as-rel2.txt.bz2") {
                    return Ok(format!("{}{}", SERIAL_2_URL, href));
                }
            }
        }

        Err(format!("No serial-2 snapshot listed for {}", stamp).into())
    }

    fn download_file(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let response = reqwest::blocking::get(url)?;
        if !response.status().is_success() {
            return Err(format!("Failed to download {}: {}", url, response.status()).into());
        }
        Ok(response.bytes()?.to_vec())
    }

    fn decompress_bz2(&self, data: &[u8]) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        let mut decoder = BzDecoder::new(data);
        let mut decompressed = Vec::new();
        std::io::copy(&mut decoder, &mut decompressed)?;
        Ok(decompressed)
    }
}

impl Default for CaidaRelationshipCollector {
    fn default() -> Self {
        Self::new()
    }
}
