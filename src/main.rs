//! 上毛かるた ローマ字タイピング練習 (ターミナル版)

use std::io::{self, Write};

use crossterm::event::{read, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use jomo_karuta::config::load_config;
use jomo_karuta::game::{GameMode, GameSession, GameStatus};

fn main() -> io::Result<()> {
    // ロギング初期化 (error/warn のみ出力)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mode = if std::env::args().any(|a| a == "--random") {
        GameMode::Random
    } else {
        GameMode::Practice
    };

    // 設定ロード
    let config = load_config();

    let mut session = GameSession::new(mode)
        .with_score_params(config.score)
        .with_partial_input(config.partial_input);
    session.start();

    println!("上毛かるた タイピング練習");
    println!("そのまま入力 / Tab: スキップ / Ctrl+P: 一時停止 / Esc: 終了");

    print_card(&session)?;

    enable_raw_mode()?;
    let loop_result = run_loop(&mut session);
    disable_raw_mode()?;
    loop_result?;

    let result = session.finish();
    println!();
    println!("---- 結果 ----");
    println!("完了札数:   {} / {}", result.completed_cards, result.total_cards);
    println!("正確度:     {:.1}%", result.accuracy * 100.0);
    println!("速度:       {:.0} 文字/分", result.speed_cpm);
    println!("最大コンボ: {}", result.max_combo);
    println!("ミス:       {}", result.mistakes);
    println!("スコア:     {}", result.score);

    Ok(())
}

/// キー入力ループ。Esc か全札完了で抜ける
fn run_loop(session: &mut GameSession) -> io::Result<()> {
    while !session.is_finished() {
        let Event::Key(key) = read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if session.status() == GameStatus::Paused {
                    session.resume();
                    print!("\r\n再開\r\n> ");
                } else {
                    session.pause();
                    print!("\r\n一時停止中 (Ctrl+P で再開)\r\n");
                }
                io::stdout().flush()?;
            }
            KeyCode::Tab => {
                print!("\r\nスキップ\r\n");
                session.skip_card();
                print_card(session)?;
            }
            KeyCode::Char(ch) => {
                let outcome = session.handle_key(ch);
                if outcome.accepted {
                    print!("{}", ch);
                } else {
                    print!("{}", ch.to_string().red());
                }
                io::stdout().flush()?;

                if outcome.card_completed {
                    print!("\r\n{}\r\n", "完了!".green());
                    print_card(session)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// 現在の札を表示
fn print_card(session: &GameSession) -> io::Result<()> {
    let Some(card) = session.current_card() else {
        return Ok(());
    };
    let mut stdout = io::stdout();
    write!(stdout, "\r\n{}\r\n", card.kanji.bold())?;
    write!(stdout, "{}\r\n", session.validator().target())?;
    write!(stdout, "> ")?;
    stdout.flush()
}
