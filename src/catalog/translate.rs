//! Name localization for imported agents
//!
//! Names are translated from a fixed table keyed by agent name, with a
//! role-word fallback ("Engineer" → "工程师"). Descriptions are not
//! translated; every locale gets a copy of the source text.

use eyre::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

use super::record::{AgentRecord, Localized};
use super::store::{read_json, write_json};

/// (name, zh, ja)
const NAME_TABLE: &[(&str, &str, &str)] = &[
    ("python-pro", "Python 专家", "Python プロ"),
    ("javascript-pro", "JavaScript 专家", "JavaScript プロ"),
    ("typescript-pro", "TypeScript 专家", "TypeScript プロ"),
    ("java-pro", "Java 专家", "Java プロ"),
    ("golang-pro", "Go 专家", "Go プロ"),
    ("rust-pro", "Rust 专家", "Rust プロ"),
    ("cpp-pro", "C++ 专家", "C++ プロ"),
    ("csharp-pro", "C# 专家", "C# プロ"),
    ("php-pro", "PHP 专家", "PHP プロ"),
    ("ruby-pro", "Ruby 专家", "Ruby プロ"),
    ("scala-pro", "Scala 专家", "Scala プロ"),
    ("sql-pro", "SQL 专家", "SQL プロ"),
    ("c-pro", "C 专家", "C プロ"),
    ("elixir-pro", "Elixir 专家", "Elixir プロ"),
    ("django-pro", "Django 专家", "Django プロ"),
    ("fastapi-pro", "FastAPI 专家", "FastAPI プロ"),
    ("flutter-expert", "Flutter 专家", "Flutter エキスパート"),
    ("ai-engineer", "AI 工程师", "AI エンジニア"),
    ("backend-architect", "后端架构师", "バックエンドアーキテクト"),
    ("frontend-developer", "前端开发工程师", "フロントエンド開発者"),
    ("mobile-developer", "移动开发工程师", "モバイル開発者"),
    ("ios-developer", "iOS 开发工程师", "iOS 開発者"),
    ("data-engineer", "数据工程师", "データエンジニア"),
    ("data-scientist", "数据科学家", "データサイエンティスト"),
    ("ml-engineer", "机器学习工程师", "機械学習エンジニア"),
    ("mlops-engineer", "MLOps 工程师", "MLOps エンジニア"),
    ("devops-troubleshooter", "DevOps 故障排除专家", "DevOps トラブルシューター"),
    ("cloud-architect", "云架构师", "クラウドアーキテクト"),
    ("hybrid-cloud-architect", "混合云架构师", "ハイブリッドクラウドアーキテクト"),
    ("kubernetes-architect", "Kubernetes 架构师", "Kubernetes アーキテクト"),
    ("security-auditor", "安全审计专家", "セキュリティ監査者"),
    ("backend-security-coder", "后端安全编程专家", "バックエンドセキュリティコーダー"),
    ("frontend-security-coder", "前端安全编程专家", "フロントエンドセキュリティコーダー"),
    ("mobile-security-coder", "移动安全编程专家", "モバイルセキュリティコーダー"),
    ("database-admin", "数据库管理员", "データベース管理者"),
    ("database-optimizer", "数据库优化专家", "データベース最適化専門家"),
    ("network-engineer", "网络工程师", "ネットワークエンジニア"),
    ("performance-engineer", "性能工程师", "パフォーマンスエンジニア"),
    ("observability-engineer", "可观测性工程师", "オブザーバビリティエンジニア"),
    ("deployment-engineer", "部署工程师", "デプロイメントエンジニア"),
    ("incident-responder", "事件响应专家", "インシデント対応者"),
    ("terraform-specialist", "Terraform 专家", "Terraform スペシャリスト"),
    ("debugger", "调试专家", "デバッガー"),
    ("error-detective", "错误检测专家", "エラー探偵"),
    ("test-automator", "测试自动化专家", "テスト自動化専門家"),
    ("tdd-orchestrator", "TDD 编排专家", "TDD オーケストレーター"),
    ("api-documenter", "API 文档专家", "API ドキュメンテーター"),
    ("docs-architect", "文档架构师", "ドキュメントアーキテクト"),
    ("tutorial-engineer", "教程工程师", "チュートリアルエンジニア"),
    ("content-marketer", "内容营销专家", "コンテンツマーケター"),
    ("prompt-engineer", "提示词工程师", "プロンプトエンジニア"),
    ("code-reviewer", "代码审查专家", "コードレビュアー"),
    ("architect-review", "架构评审专家", "アーキテクチャレビュアー"),
    ("legacy-modernizer", "遗留系统现代化专家", "レガシーモダナイザー"),
    ("dx-optimizer", "开发体验优化专家", "DX最適化専門家"),
    ("business-analyst", "业务分析师", "ビジネスアナリスト"),
    ("hr-pro", "人力资源专家", "人事プロ"),
    ("customer-support", "客户支持专家", "カスタマーサポート"),
    ("sales-automator", "销售自动化专家", "セールス自動化専門家"),
    ("legal-advisor", "法律顾问", "法的アドバイザー"),
    ("risk-manager", "风险管理专家", "リスクマネージャー"),
    ("quant-analyst", "量化分析师", "クオンツアナリスト"),
    ("ui-ux-designer", "UI/UX 设计师", "UI/UX デザイナー"),
    ("ui-visual-validator", "UI 视觉验证专家", "UI ビジュアル検証者"),
    ("blockchain-developer", "区块链开发工程师", "ブロックチェーン開発者"),
    ("unity-developer", "Unity 开发工程师", "Unity 開発者"),
    ("minecraft-bukkit-pro", "Minecraft Bukkit 专家", "Minecraft Bukkit プロ"),
    ("graphql-architect", "GraphQL 架构师", "GraphQL アーキテクト"),
    ("payment-integration", "支付集成专家", "決済統合専門家"),
    ("search-specialist", "搜索专家", "検索スペシャリスト"),
    ("context-manager", "上下文管理专家", "コンテキストマネージャー"),
    ("reference-builder", "参考资料构建专家", "リファレンスビルダー"),
    ("mermaid-expert", "Mermaid 图表专家", "Mermaid エキスパート"),
    ("seo-authority-builder", "SEO 权威建设专家", "SEO オーソリティビルダー"),
    ("seo-cannibalization-detector", "SEO 竞争检测专家", "SEO カニバリゼーション検出器"),
    ("seo-content-auditor", "SEO 内容审计专家", "SEO コンテンツ監査者"),
    ("seo-content-planner", "SEO 内容规划专家", "SEO コンテンツプランナー"),
    ("seo-content-refresher", "SEO 内容更新专家", "SEO コンテンツリフレッシャー"),
    ("seo-content-writer", "SEO 内容撰写专家", "SEO コンテンツライター"),
    ("seo-keyword-strategist", "SEO 关键词策略专家", "SEO キーワードストラテジスト"),
    ("seo-meta-optimizer", "SEO 元数据优化专家", "SEO メタ最適化専門家"),
    ("seo-snippet-hunter", "SEO 片段搜寻专家", "SEO スニペットハンター"),
    ("seo-structure-architect", "SEO 结构架构师", "SEO 構造アーキテクト"),
];

static NAMES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| NAME_TABLE.iter().map(|(name, zh, ja)| (*name, (*zh, *ja))).collect());

/// Role words replaced when no table entry matches; first hit wins.
/// (word, zh, ja)
const ROLE_WORDS: &[(&str, &str, &str)] = &[
    ("expert", "专家", "エキスパート"),
    ("developer", "开发工程师", "開発者"),
    ("engineer", "工程师", "エンジニア"),
    ("architect", "架构师", "アーキテクト"),
    ("specialist", "专家", "スペシャリスト"),
    ("manager", "管理专家", "マネージャー"),
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Translate a display name into `locale` ("zh" or "ja").
/// Returns the input unchanged for other locales or when nothing matches.
pub fn translate_name(text: &str, locale: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lower = text.to_lowercase();
    if let Some((zh, ja)) = NAMES.get(lower.as_str()) {
        return match locale {
            "zh" => zh.to_string(),
            "ja" => ja.to_string(),
            _ => text.to_string(),
        };
    }

    for (word, zh, ja) in ROLE_WORDS {
        if !lower.contains(word) {
            continue;
        }
        let replacement = match locale {
            "zh" => zh,
            "ja" => ja,
            _ => return text.to_string(),
        };
        return text.replace(word, replacement).replace(&capitalize(word), replacement);
    }

    text.to_string()
}

fn fill_copies(field: &mut Localized, source_locale: &str, locales: &[String]) {
    let source = field.get(source_locale).cloned().unwrap_or_default();
    for locale in locales.iter().filter(|l| l.as_str() != source_locale) {
        field.insert(locale.clone(), source.clone());
    }
}

/// Localize a record in place: names are translated, descriptions copied
pub fn translate_record(record: &mut AgentRecord, source_locale: &str, locales: &[String]) {
    let source_name = record
        .name
        .get(source_locale)
        .cloned()
        .unwrap_or_else(|| record.id.clone());

    for locale in locales.iter().filter(|l| l.as_str() != source_locale) {
        let mut translated = translate_name(&source_name, locale);
        if translated == source_name {
            translated = translate_name(&record.id, locale);
            if translated == record.id {
                translated = source_name.clone();
            }
        }
        record.name.insert(locale.clone(), translated);
    }

    fill_copies(&mut record.description, source_locale, locales);
    fill_copies(&mut record.long_description, source_locale, locales);
}

/// Translate one metadata.json in place
pub fn translate_metadata_file(path: &Path, source_locale: &str, locales: &[String]) -> Result<AgentRecord> {
    let mut record: AgentRecord = read_json(path)?;
    translate_record(&mut record, source_locale, locales);
    write_json(path, &record)?;
    Ok(record)
}
