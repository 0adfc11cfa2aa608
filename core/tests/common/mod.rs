#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const THREE_PRODUCTS: &str = "\
id,Category,name,subtitle,price,discount_price,main_image_url
1,A,Whole milk,1 L,\"€ 1,29\",,https://img/1.png
2,A,Skimmed milk,1 L,\"€ 1,19\",\"€ 0,99\",https://img/2.png
3,B,Espresso beans,500 g,\"€ 7,45\",,https://img/3.png
";

pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

/// `n` rows of `id,value` with distinct ids.
pub fn numbered_csv(n: usize) -> String {
    let mut s = String::from("id,value\n");
    for i in 0..n {
        s.push_str(&format!("{i},v{i}\n"));
    }
    s
}
