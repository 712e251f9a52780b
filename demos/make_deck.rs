//! Generate the "ChatGPT Deep Dive" sample deck.
//!
//! Every slide gets a white background, an accent rule under the title and a
//! 28pt bold title. The cover slide carries a subtitle; the others a bullet list.
//! A base64 copy of the package is written next to it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example make_deck
//! cargo run --example make_deck -- -o /tmp/deck.pptx --external-zip
//! cargo run --example make_deck -- --deck my_deck.yaml -o my_deck.pptx
//! ```
//!
//! Set `RUST_LOG=debug` to see every staged part and archive entry.

use clap::Parser;
use slidepress::ooxml::opc::Compression;
use slidepress::{
    ArchiverKind, HexColor, LineStyle, PackageWriter, Presentation, TextStyle, Theme,
    VerticalAlign, WriterOptions,
};
use std::path::PathBuf;

/// Build the sample deck (or a YAML deck) as a .pptx package
#[derive(Parser, Debug)]
#[command(name = "make_deck", version)]
struct Args {
    /// Output package path
    #[arg(short, long, default_value = "output/antonai_chatgpt_deepdive.pptx")]
    output: PathBuf,

    /// Load the deck from a YAML description instead of the built-in sample
    #[arg(long, value_name = "YAML")]
    deck: Option<PathBuf>,

    /// Load writer options from a YAML file
    #[arg(long, value_name = "YAML")]
    options: Option<PathBuf>,

    /// Archive with the external `zip` tool instead of the built-in writer
    #[arg(long)]
    external_zip: bool,

    /// Store entries uncompressed
    #[arg(long)]
    stored: bool,

    /// Skip the `.b64.txt` sidecar
    #[arg(long)]
    no_base64: bool,
}

struct SlideContent {
    title: &'static str,
    subtitle: Option<&'static str>,
    bullets: &'static [&'static str],
}

const SLIDES: &[SlideContent] = &[
    SlideContent {
        title: "ChatGPT 사용법을 뼛속까지 (안똔AI)",
        subtitle: Some("Apps / 개발자설정 / MCP / 자동화 / 실전 데모"),
        bullets: &[],
    },
    SlideContent {
        title: "오늘 얻어갈 것 5가지",
        subtitle: None,
        bullets: &[
            "ChatGPT 화면 구성 요소를 한 장으로 이해",
            "Apps와 모델의 역할 분담을 구분",
            "개발자 설정으로 생산성 올리기",
            "MCP 연결과 안전 규칙 습득",
            "실전 데모로 자동화 흐름 설계",
        ],
    },
    SlideContent {
        title: "ChatGPT 화면 구조 한 장 정리",
        subtitle: None,
        bullets: &[
            "모델: 답변의 두뇌 (GPT 계열 선택)",
            "툴: 파일, 브라우저, 코드 실행 등 확장",
            "앱: 외부 서비스와 연결되는 UI",
            "파일: 참고 자료/근거를 직접 넣는 방식",
            "프로젝트: 작업 컨텍스트와 히스토리 묶음",
        ],
    },
    SlideContent {
        title: "Apps: 앱이 하는 일 vs 모델이 하는 일",
        subtitle: None,
        bullets: &[
            "앱: Canva, Notion 등 UI/데이터 연결",
            "모델: 요약/분석/생성 같은 사고 작업",
            "앱은 권한/데이터를 가져오고",
            "모델은 지시문을 따라 결과를 만들기",
            "둘의 경계를 이해하면 결과가 안정적",
        ],
    },
    SlideContent {
        title: "개발자 설정: 뭘 켜면 뭐가 달라질까",
        subtitle: None,
        bullets: &[
            "도구 허용: 모델이 외부 기능 호출",
            "파일 처리: PDF/CSV 분석 속도 개선",
            "메모리/프로젝트: 장기 컨텍스트 유지",
            "실험 기능: 베타 기능 빠르게 체험",
            "권한 설정: 안전 범위 명확히 하기",
        ],
    },
    SlideContent {
        title: "MCP: 개념 + 안전하게 쓰는 룰",
        subtitle: None,
        bullets: &[
            "MCP = 모델이 도구를 호출하는 연결 규칙",
            "서버/클라이언트로 기능 확장",
            "권한 최소화: 꼭 필요한 도구만 연결",
            "민감 데이터는 로컬/폐쇄망 우선",
            "로그/감사로 호출 내역 확인",
        ],
    },
    SlideContent {
        title: "실전 데모 1: 문서/표/리서치 3-step",
        subtitle: None,
        bullets: &[
            "1) 자료 수집: 파일 업로드 + 요약",
            "2) 구조화: 표/목차로 재정리",
            "3) 인사이트: 비교/결론/다음 액션",
            "템플릿화하면 재사용이 쉬움",
        ],
    },
    SlideContent {
        title: "실전 데모 2: 자동화 시나리오",
        subtitle: None,
        bullets: &[
            "조건: 어떤 이벤트가 시작 트리거인지",
            "트리거: 스케줄/웹훅/파일 변경",
            "출력: 문서/보고서/알림으로 자동 발행",
            "실패 대비: 재시도와 에러 로그",
            "작게 시작해서 점진적으로 확장",
        ],
    },
    SlideContent {
        title: "Codex란?",
        subtitle: None,
        bullets: &[
            "ChatGPT 채팅: 대화 중심",
            "Codex 작업공간: 프로젝트/파일 중심",
            "여러 파일 수정 + 실행 + 검증까지",
            "팀/레포 단위로 협업 가능",
            "장기 작업에 최적화된 워크플로",
        ],
    },
    SlideContent {
        title: "Codex로 산출물 만들기: 끝까지",
        subtitle: None,
        bullets: &[
            "코드 작성 → 실행 → 결과 확인",
            "문서/슬라이드 자동 생성",
            "버전 관리와 변경 이력 유지",
            "오늘 실습: 슬라이드 덱 자동 생성",
            "반복 작업을 파이프라인화",
        ],
    },
    SlideContent {
        title: "체크리스트: 실패 vs 성공 지시문",
        subtitle: None,
        bullets: &[
            "실패: 목적이 모호하고 예시가 없음",
            "실패: 형식/길이/제약 조건 누락",
            "성공: 목표 + 결과물 + 제약 명확",
            "성공: 입력 데이터와 맥락 제공",
            "성공: 검수 기준(체크리스트) 포함",
        ],
    },
    SlideContent {
        title: "엔딩",
        subtitle: None,
        bullets: &[
            "다음 영상: MCP 실전 자동화 구축기",
            "구독/좋아요/댓글로 질문 남기기",
            "자료 링크 자리: QR 또는 URL",
            "오늘의 핵심: 구조 → 자동화 → 검증",
        ],
    },
];

fn sample_deck() -> slidepress::Result<Presentation> {
    let text = HexColor::new("000000")?;
    let accent = HexColor::new("2B6CB0")?;

    let title_style = TextStyle::new()
        .position(0.6, 0.2)
        .size(12.1, 0.6)
        .font_size(28.0)
        .bold(true)
        .color(text.clone());
    let subtitle_style = TextStyle::new()
        .position(0.9, 2.1)
        .size(11.6, 1.2)
        .font_size(22.0)
        .color(text.clone());
    let body_style = TextStyle::new()
        .position(0.9, 1.4)
        .size(11.6, 5.4)
        .font_size(20.0)
        .color(text)
        .valign(VerticalAlign::Top);
    let rule = LineStyle::new().position(0.6, 0.95).width(12.1).color(accent);

    let mut deck = Presentation::new()
        .with_author("AntonAI")
        .with_company("AntonAI")
        .with_subject("ChatGPT Deep Dive")
        .with_theme(Theme {
            head_font: Some("Arial".to_string()),
            body_font: Some("Arial".to_string()),
            lang: "ko-KR".to_string(),
            ..Theme::default()
        });

    for (index, content) in SLIDES.iter().enumerate() {
        let slide = deck.add_slide();
        slide.set_background(HexColor::white());
        slide
            .add_line(rule.clone())?
            .add_text(content.title, title_style.clone())?;

        match content.subtitle {
            Some(subtitle) if index == 0 => {
                slide.add_text(subtitle, subtitle_style.clone())?;
            },
            _ if !content.bullets.is_empty() => {
                let body = content
                    .bullets
                    .iter()
                    .map(|line| format!("• {}", line))
                    .collect::<Vec<_>>()
                    .join("\n");
                slide.add_text(body, body_style.clone())?;
            },
            _ => {},
        }
    }
    Ok(deck)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let deck = match &args.deck {
        Some(path) => Presentation::from_yaml_str(&tokio::fs::read_to_string(path).await?)?,
        None => sample_deck()?,
    };

    let mut options = match &args.options {
        Some(path) => WriterOptions::from_yaml_str(&tokio::fs::read_to_string(path).await?)?,
        None => WriterOptions::new().base64_sidecar(true),
    };
    if args.external_zip {
        options = options.archiver(ArchiverKind::External {
            program: PathBuf::from("zip"),
        });
    }
    if args.stored {
        options = options.compression(Compression::Stored);
    }
    if args.no_base64 {
        options = options.base64_sidecar(false);
    }
    let sidecar = options.base64_sidecar;

    let path = PackageWriter::with_options(options)
        .write(&deck, &args.output)
        .await?;

    println!("Deck created: {}", path.display());
    if sidecar {
        println!(
            "Base64 created: {}",
            slidepress::ooxml::pptx::sidecar_path(&path).display()
        );
    }
    Ok(())
}
