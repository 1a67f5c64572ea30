//! 乱数 (xorshift64)
//!
//! 出題シャッフルと部分入力範囲の選択にだけ使う軽量実装。
//! シードを固定すれば再現可能。

use std::time::{SystemTime, UNIX_EPOCH};

/// xorshift64 乱数生成器
#[derive(Debug, Clone)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    /// シード指定で生成 (0 は内部で非ゼロ値に置き換え)
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// 現在時刻をシードにして生成
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// 0..n の乱数 (n = 0 なら 0)
    pub fn gen_range(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u64() % n as u64) as usize
    }
}
