//! 設定ファイル ロード/保存 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::scoring::ScoreParams;
use crate::typing::PartialInputConfig;

/// アプリ設定
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GameConfig {
    /// 部分入力モードの設定
    #[serde(default)]
    pub partial_input: PartialInputConfig,
    /// スコア計算パラメータ
    #[serde(default)]
    pub score: ScoreParams,
}

/// 設定ファイル経路: ~/.config/jomo-karuta/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 未設定や無効時は /var/tmp フォールバック
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("jomo-karuta").join("config.json")
}

/// 設定ファイルをロード (ファイルなし・パース失敗時はデフォルト)
pub fn load_config() -> GameConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| GameConfig::default()),
        Err(_) => GameConfig::default(),
    }
}

/// 設定ファイルを保存
pub fn save_config(config: &GameConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("設定ディレクトリ作成失敗: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("直列化失敗: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("設定ファイル保存失敗: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::PartialInputMode;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert!(!config.partial_input.enabled);
        assert_eq!(config.partial_input.character_count, 5);
        assert_eq!(config.score.base_per_attempt, 100.0);
        assert_eq!(config.score.combo_cap, 50);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = GameConfig {
            partial_input: PartialInputConfig {
                enabled: true,
                character_count: 8,
                mode: PartialInputMode::Random,
                highlight_range: false,
            },
            score: ScoreParams::default().with_combo_cap(30),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 古い設定ファイルに score がない場合はデフォルト
        let json = r#"{"partial_input": {"enabled": true}}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert!(config.partial_input.enabled);
        assert_eq!(config.partial_input.character_count, 5);
        assert_eq!(config.score.acc_exponent, 2.0);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
