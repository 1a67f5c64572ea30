//! ゲームセッション管理
//!
//! 出題順・一時停止・記録集計など、検証エンジンを動かすための最小限の
//! オーケストレーション。1セッション = 1プレイで、キー入力は呼び出し側が
//! 直列に渡す前提 (並行アクセスなし)。

use std::time::{Duration, Instant};

use crate::game::cards::{KarutaCard, KARUTA_CARDS};
use crate::rng::XorShift;
use crate::scoring::{calc_score_with, ScoreInput, ScoreParams};
use crate::typing::{InputValidator, PartialInputConfig, PartialInputProcessor, PartialInputRange};

/// ゲームモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// 札順に練習
    Practice,
    /// シャッフルして出題
    Random,
    /// 全札をシャッフルし、スキップなしの通し
    Challenge,
}

/// セッション状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// 1枚分の挑戦記録。完了またはスキップ時に作られ、以後変更しない
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub card_id: &'static str,
    pub elapsed_ms: u64,
    pub mistake_count: u32,
    pub accuracy_percent: f64,
    pub completed: bool,
}

/// キー入力1回の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    /// 受理されたか
    pub accepted: bool,
    /// この入力でカードが完了したか
    pub card_completed: bool,
}

/// セッション全体の結果
#[derive(Debug, Clone)]
pub struct GameResult {
    pub records: Vec<AttemptRecord>,
    pub total_time_ms: u64,
    pub total_cards: u32,
    pub completed_cards: u32,
    pub accepted_chars: u32,
    pub mistakes: u32,
    /// 正確度 (0.0 ~ 1.0)
    pub accuracy: f64,
    /// 1分あたりの入力文字数
    pub speed_cpm: f64,
    pub max_combo: u32,
    pub score: u32,
}

/// ゲームセッション
pub struct GameSession {
    mode: GameMode,
    status: GameStatus,
    cards: Vec<&'static KarutaCard>,
    current_index: usize,
    validator: InputValidator,
    score_params: ScoreParams,
    partial_config: PartialInputConfig,
    partial: PartialInputProcessor,
    rng: XorShift,

    session_started: Option<Instant>,
    card_started: Option<Instant>,
    paused_at: Option<Instant>,
    session_paused: Duration,
    card_paused: Duration,

    combo: u32,
    max_combo: u32,
    accepted_chars: u32,
    total_mistakes: u32,
    records: Vec<AttemptRecord>,
}

impl GameSession {
    /// 全札でセッションを作成
    pub fn new(mode: GameMode) -> Self {
        Self::with_cards(mode, KARUTA_CARDS.iter().collect())
    }

    /// 出題札を指定して作成
    pub fn with_cards(mode: GameMode, cards: Vec<&'static KarutaCard>) -> Self {
        Self {
            mode,
            status: GameStatus::Idle,
            cards,
            current_index: 0,
            validator: InputValidator::new(),
            score_params: ScoreParams::default(),
            partial_config: PartialInputConfig::default(),
            partial: PartialInputProcessor::new(),
            rng: XorShift::from_entropy(),
            session_started: None,
            card_started: None,
            paused_at: None,
            session_paused: Duration::ZERO,
            card_paused: Duration::ZERO,
            combo: 0,
            max_combo: 0,
            accepted_chars: 0,
            total_mistakes: 0,
            records: Vec::new(),
        }
    }

    /// シャッフルのシードを固定 (再現用)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = XorShift::new(seed);
        self
    }

    /// スコアパラメータを上書き
    pub fn with_score_params(mut self, params: ScoreParams) -> Self {
        self.score_params = params;
        self
    }

    /// 部分入力モードを設定 (enabled なら読みの一部だけを出題)
    pub fn with_partial_input(mut self, config: PartialInputConfig) -> Self {
        self.partial_config = config;
        self
    }

    /// セッションを開始し、最初の札をターゲットに設定
    pub fn start(&mut self) {
        if matches!(self.mode, GameMode::Random | GameMode::Challenge) {
            self.shuffle_cards();
        }
        self.current_index = 0;
        self.status = if self.cards.is_empty() {
            GameStatus::Completed
        } else {
            GameStatus::Playing
        };
        self.session_started = Some(Instant::now());
        self.set_current_target();
    }

    /// Fisher-Yates でシャッフル
    fn shuffle_cards(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.gen_range(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// 現在の札
    pub fn current_card(&self) -> Option<&'static KarutaCard> {
        self.cards.get(self.current_index).copied()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// 現在の札に対する検証器 (表示用の参照)
    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// 完了/スキップ済みの記録
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// キー入力を処理
    /// 受理でコンボが伸び、拒否でコンボが切れる。カード完了時は次の札へ進む
    pub fn handle_key(&mut self, ch: char) -> KeyOutcome {
        if self.status != GameStatus::Playing {
            return KeyOutcome {
                accepted: false,
                card_completed: false,
            };
        }

        let accepted = self.validator.validate_char(ch);
        if !accepted {
            self.combo = 0;
            return KeyOutcome {
                accepted: false,
                card_completed: false,
            };
        }

        self.accepted_chars += 1;
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);

        let card_completed = self.validator.is_complete();
        if card_completed {
            self.finish_card(true);
        }

        KeyOutcome {
            accepted: true,
            card_completed,
        }
    }

    /// 現在の札をスキップして次へ (チャレンジモードではスキップ不可)
    pub fn skip_card(&mut self) {
        if self.status != GameStatus::Playing || self.mode == GameMode::Challenge {
            return;
        }
        self.finish_card(false);
    }

    /// 一時停止。停止中の時間は経過時間に含めない
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
            self.paused_at = Some(Instant::now());
        }
    }

    /// 再開
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            if let Some(paused_at) = self.paused_at.take() {
                let paused = paused_at.elapsed();
                self.session_paused += paused;
                self.card_paused += paused;
            }
            self.status = GameStatus::Playing;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Completed
    }

    /// 記録を確定して次の札へ
    fn finish_card(&mut self, completed: bool) {
        let card_id = self.current_card().map(|c| c.id).unwrap_or("");
        let elapsed = self
            .card_started
            .map(|t| t.elapsed().saturating_sub(self.card_paused))
            .unwrap_or(Duration::ZERO);

        let position = self.validator.current_position() as u32;
        let mistakes = self.validator.mistake_count();
        let total_inputs = position + mistakes;
        let accuracy_percent = if total_inputs > 0 {
            f64::from(position) / f64::from(total_inputs) * 100.0
        } else {
            100.0
        };

        self.total_mistakes += mistakes;
        self.records.push(AttemptRecord {
            card_id,
            elapsed_ms: elapsed.as_millis() as u64,
            mistake_count: mistakes,
            accuracy_percent,
            completed,
        });

        self.current_index += 1;
        if self.current_index >= self.cards.len() {
            self.status = GameStatus::Completed;
            self.card_started = None;
        } else {
            self.set_current_target();
        }
    }

    /// 現在の部分入力範囲 (部分入力モード時の表示用)
    pub fn current_range(&self) -> Option<&PartialInputRange> {
        self.partial.current_range()
    }

    /// 現在の札の読みを検証器に設定 (スペースは除いて打たせる)
    /// 部分入力モードなら範囲を切り出してその部分だけをターゲットにする
    fn set_current_target(&mut self) {
        if let Some(card) = self.current_card() {
            let reading: String = card.hiragana.chars().filter(|c| !c.is_whitespace()).collect();
            let range = self.partial.calculate_range(&reading, &self.partial_config);
            self.validator.set_target(&range.text);
            self.partial.set_range(range);
            self.card_started = Some(Instant::now());
            self.card_paused = Duration::ZERO;
            log::debug!("出題: {} ({})", card.kanji, card.id);
        }
    }

    /// セッションを終了して結果を集計
    /// 未完了の札があってもそのまま締める
    pub fn finish(&mut self) -> GameResult {
        // 停止中に呼ばれたら停止時間をまず確定させる
        if let Some(paused_at) = self.paused_at.take() {
            self.session_paused += paused_at.elapsed();
        }
        // 打ちかけの札は記録に入れない (解答数は確定分のみ)
        self.status = GameStatus::Completed;

        let total_time = self
            .session_started
            .map(|t| t.elapsed().saturating_sub(self.session_paused))
            .unwrap_or(Duration::ZERO);

        let total_inputs = self.accepted_chars + self.total_mistakes;
        let accuracy = if total_inputs > 0 {
            f64::from(self.accepted_chars) / f64::from(total_inputs)
        } else {
            1.0
        };

        let minutes = total_time.as_secs_f64() / 60.0;
        let speed_cpm = if minutes > 0.0 {
            f64::from(self.accepted_chars) / minutes
        } else {
            0.0
        };

        let completed_cards = self.records.iter().filter(|r| r.completed).count() as u32;
        let score = calc_score_with(
            &ScoreInput {
                attempt_count: completed_cards,
                accuracy,
                speed: speed_cpm,
                max_combo: self.max_combo,
            },
            &self.score_params,
        );

        GameResult {
            records: self.records.clone(),
            total_time_ms: total_time.as_millis() as u64,
            total_cards: self.cards.len() as u32,
            completed_cards,
            accepted_chars: self.accepted_chars,
            mistakes: self.total_mistakes,
            accuracy,
            speed_cpm,
            max_combo: self.max_combo,
            score,
        }
    }
}
