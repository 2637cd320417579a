use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

const VENDORS: [&str; 5] = ["Shoprite", "Total Energies", "Mobil", "GTBank", "Spar"];
const AMOUNTS: [i64; 5] = [5_000, 8_500, 12_000, 25_000, 45_000];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic", "bmp"];

/// Fields "read" off a receipt photo. There is no real OCR: vendor and amount
/// are picked from fixed lists by a hash of the file contents, so the pick
/// looks arbitrary but is not random. The same photo always scans the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptScan {
    pub file_name: String,
    pub vendor: &'static str,
    pub amount: i64,
    pub date: NaiveDate,
}

pub(crate) fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

pub fn scan_file(path: &Path, today: NaiveDate) -> Result<ReceiptScan> {
    if !is_image(path) {
        anyhow::bail!("Not an image file: {}", path.display());
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read receipt: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("receipt")
        .to_string();
    Ok(scan_bytes(file_name, &bytes, today))
}

pub(crate) fn scan_bytes(file_name: String, bytes: &[u8], today: NaiveDate) -> ReceiptScan {
    let h = fnv1a(bytes);

    let vendor = VENDORS[(h % VENDORS.len() as u64) as usize];
    let amount = AMOUNTS[((h >> 32) % AMOUNTS.len() as u64) as usize];

    tracing::debug!(file = %file_name, vendor, amount, "simulated receipt scan");

    ReceiptScan {
        file_name,
        vendor,
        amount,
        date: today,
    }
}

/// FNV-1a, so the same photo scans the same on every build.
fn fnv1a(data: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in data {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
