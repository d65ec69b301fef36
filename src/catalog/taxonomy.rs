//! Static category tables
//!
//! Two independent taxonomies live here:
//! - [`REGISTRY_CATEGORIES`]: the four content-inferred categories shown in
//!   the registry document
//! - [`CURATED_CATEGORIES`]: hand-maintained browse categories with explicit
//!   member lists, used for the category shards
//!
//! They are not cross-checked. An agent's inferred category has no bearing on
//! which curated shard it lands in.

/// Text in the three shipped locales
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub en: &'static str,
    pub zh: &'static str,
    pub ja: &'static str,
}

impl Labels {
    pub fn pairs(&self) -> [(&'static str, &'static str); 3] {
        [("en", self.en), ("zh", self.zh), ("ja", self.ja)]
    }
}

/// Registry category metadata (en/zh only)
#[derive(Debug, Clone, Copy)]
pub struct RegistryCategory {
    pub id: &'static str,
    pub en: &'static str,
    pub zh: &'static str,
    pub description_en: &'static str,
    pub description_zh: &'static str,
    pub icon: &'static str,
}

pub const REGISTRY_CATEGORIES: &[RegistryCategory] = &[
    RegistryCategory {
        id: "development",
        en: "Code Development",
        zh: "代码开发",
        description_en: "Agents for coding, refactoring, and code quality",
        description_zh: "用于编码、重构和代码质量的代理",
        icon: "💻",
    },
    RegistryCategory {
        id: "debugging",
        en: "Problem Solving",
        zh: "问题排查",
        description_en: "Agents for debugging and troubleshooting",
        description_zh: "用于调试和故障排除的代理",
        icon: "🐛",
    },
    RegistryCategory {
        id: "data",
        en: "Data & Analytics",
        zh: "数据分析",
        description_en: "Agents for data analysis and processing",
        description_zh: "用于数据分析和处理的代理",
        icon: "📊",
    },
    RegistryCategory {
        id: "documentation",
        en: "Documentation",
        zh: "文档编写",
        description_en: "Agents for writing and maintaining documentation",
        description_zh: "用于编写和维护文档的代理",
        icon: "📝",
    },
];

/// A browse category with its hand-picked members
#[derive(Debug, Clone, Copy)]
pub struct CuratedCategory {
    pub id: &'static str,
    pub name: Labels,
    pub description: Labels,
    pub agents: &'static [&'static str],
}

pub const CURATED_CATEGORIES: &[CuratedCategory] = &[
    CuratedCategory {
        id: "core-architecture",
        name: Labels {
            en: "Core Architecture",
            zh: "核心架构",
            ja: "コアアーキテクチャ",
        },
        description: Labels {
            en: "Backend APIs, system architecture, and cloud infrastructure design",
            zh: "后端API、系统架构和云基础设施设计",
            ja: "バックエンドAPI、システムアーキテクチャ、クラウドインフラ設計",
        },
        agents: &[
            "backend-architect",
            "frontend-developer",
            "graphql-architect",
            "architect-review",
            "cloud-architect",
            "hybrid-cloud-architect",
            "kubernetes-architect",
        ],
    },
    CuratedCategory {
        id: "ui-mobile",
        name: Labels {
            en: "UI/UX & Mobile",
            zh: "UI/UX与移动端",
            ja: "UI/UX・モバイル",
        },
        description: Labels {
            en: "User interface design, mobile development, and visual validation",
            zh: "用户界面设计、移动开发和视觉验证",
            ja: "ユーザーインターフェース設計、モバイル開発、ビジュアル検証",
        },
        agents: &[
            "ui-ux-designer",
            "ui-visual-validator",
            "mobile-developer",
            "ios-developer",
            "flutter-expert",
        ],
    },
    CuratedCategory {
        id: "systems-programming",
        name: Labels {
            en: "Systems & Low-Level Programming",
            zh: "系统与底层编程",
            ja: "システム・低レベルプログラミング",
        },
        description: Labels {
            en: "System programming, memory management, and performance-critical applications",
            zh: "系统编程、内存管理和性能关键应用",
            ja: "システムプログラミング、メモリ管理、パフォーマンス重視アプリケーション",
        },
        agents: &["c-pro", "cpp-pro", "rust-pro", "golang-pro"],
    },
    CuratedCategory {
        id: "web-programming",
        name: Labels {
            en: "Web & Application Programming",
            zh: "Web与应用程序编程",
            ja: "Web・アプリケーションプログラミング",
        },
        description: Labels {
            en: "Modern web development with JavaScript, Python, and other dynamic languages",
            zh: "使用JavaScript、Python等动态语言进行现代Web开发",
            ja: "JavaScript、Pythonなどの動的言語によるモダンWeb開発",
        },
        agents: &["javascript-pro", "typescript-pro", "python-pro", "ruby-pro", "php-pro"],
    },
    CuratedCategory {
        id: "enterprise-programming",
        name: Labels {
            en: "Enterprise & JVM Programming",
            zh: "企业与JVM编程",
            ja: "エンタープライズ・JVMプログラミング",
        },
        description: Labels {
            en: "Enterprise-grade development with Java, Scala, and .NET platforms",
            zh: "使用Java、Scala和.NET平台进行企业级开发",
            ja: "Java、Scala、.NETプラットフォームによるエンタープライズ開発",
        },
        agents: &["java-pro", "scala-pro", "csharp-pro"],
    },
    CuratedCategory {
        id: "specialized-platforms",
        name: Labels {
            en: "Specialized Platforms",
            zh: "专业平台",
            ja: "専門プラットフォーム",
        },
        description: Labels {
            en: "Domain-specific programming platforms and frameworks",
            zh: "特定领域的编程平台和框架",
            ja: "ドメイン固有のプログラミングプラットフォームとフレームワーク",
        },
        agents: &["elixir-pro", "unity-developer", "minecraft-bukkit-pro", "sql-pro"],
    },
    CuratedCategory {
        id: "devops-deployment",
        name: Labels {
            en: "DevOps & Deployment",
            zh: "DevOps与部署",
            ja: "DevOps・デプロイメント",
        },
        description: Labels {
            en: "CI/CD pipelines, containerization, and infrastructure automation",
            zh: "CI/CD管道、容器化和基础设施自动化",
            ja: "CI/CDパイプライン、コンテナ化、インフラ自動化",
        },
        agents: &[
            "devops-troubleshooter",
            "deployment-engineer",
            "terraform-specialist",
            "dx-optimizer",
        ],
    },
    CuratedCategory {
        id: "database-management",
        name: Labels {
            en: "Database Management",
            zh: "数据库管理",
            ja: "データベース管理",
        },
        description: Labels {
            en: "Database optimization, administration, and performance tuning",
            zh: "数据库优化、管理和性能调优",
            ja: "データベース最適化、管理、パフォーマンスチューニング",
        },
        agents: &["database-optimizer", "database-admin"],
    },
    CuratedCategory {
        id: "incident-network",
        name: Labels {
            en: "Incident Response & Network",
            zh: "事件响应与网络",
            ja: "インシデント対応・ネットワーク",
        },
        description: Labels {
            en: "Production incident management and network operations",
            zh: "生产事件管理和网络运维",
            ja: "本番インシデント管理とネットワーク運用",
        },
        agents: &["incident-responder", "network-engineer"],
    },
    CuratedCategory {
        id: "code-quality",
        name: Labels {
            en: "Code Quality & Review",
            zh: "代码质量与审查",
            ja: "コード品質・レビュー",
        },
        description: Labels {
            en: "Code review, security auditing, and best practices enforcement",
            zh: "代码审查、安全审计和最佳实践执行",
            ja: "コードレビュー、セキュリティ監査、ベストプラクティス実施",
        },
        agents: &[
            "code-reviewer",
            "security-auditor",
            "backend-security-coder",
            "frontend-security-coder",
            "mobile-security-coder",
        ],
    },
    CuratedCategory {
        id: "testing-debugging",
        name: Labels {
            en: "Testing & Debugging",
            zh: "测试与调试",
            ja: "テスト・デバッグ",
        },
        description: Labels {
            en: "Test automation, debugging, and error analysis",
            zh: "测试自动化、调试和错误分析",
            ja: "テスト自動化、デバッグ、エラー解析",
        },
        agents: &["test-automator", "tdd-orchestrator", "debugger", "error-detective"],
    },
    CuratedCategory {
        id: "performance-observability",
        name: Labels {
            en: "Performance & Observability",
            zh: "性能与可观测性",
            ja: "パフォーマンス・可観測性",
        },
        description: Labels {
            en: "Application performance optimization and monitoring",
            zh: "应用性能优化和监控",
            ja: "アプリケーションパフォーマンス最適化とモニタリング",
        },
        agents: &["performance-engineer", "observability-engineer", "search-specialist"],
    },
    CuratedCategory {
        id: "data-analytics",
        name: Labels {
            en: "Data Engineering & Analytics",
            zh: "数据工程与分析",
            ja: "データエンジニアリング・分析",
        },
        description: Labels {
            en: "Data processing, analytics, and business intelligence",
            zh: "数据处理、分析和商业智能",
            ja: "データ処理、分析、ビジネスインテリジェンス",
        },
        agents: &["data-scientist", "data-engineer"],
    },
    CuratedCategory {
        id: "machine-learning",
        name: Labels {
            en: "Machine Learning & AI",
            zh: "机器学习与人工智能",
            ja: "機械学習・AI",
        },
        description: Labels {
            en: "ML pipelines, AI applications, and prompt engineering",
            zh: "ML管道、AI应用和提示工程",
            ja: "MLパイプライン、AIアプリケーション、プロンプトエンジニアリング",
        },
        agents: &["ai-engineer", "ml-engineer", "mlops-engineer", "prompt-engineer"],
    },
    CuratedCategory {
        id: "documentation",
        name: Labels {
            en: "Documentation & Technical Writing",
            zh: "文档与技术写作",
            ja: "ドキュメント・技術文書",
        },
        description: Labels {
            en: "Technical documentation, API specs, and content creation",
            zh: "技术文档、API规范和内容创建",
            ja: "技術文書、API仕様、コンテンツ作成",
        },
        agents: &[
            "docs-architect",
            "api-documenter",
            "reference-builder",
            "tutorial-engineer",
            "mermaid-expert",
        ],
    },
    CuratedCategory {
        id: "business-finance",
        name: Labels {
            en: "Business Analysis & Finance",
            zh: "业务分析与金融",
            ja: "ビジネス分析・金融",
        },
        description: Labels {
            en: "Business metrics, financial modeling, and risk analysis",
            zh: "业务指标、金融建模和风险分析",
            ja: "ビジネスメトリクス、金融モデリング、リスク分析",
        },
        agents: &["business-analyst", "quant-analyst", "risk-manager"],
    },
    CuratedCategory {
        id: "marketing-sales",
        name: Labels {
            en: "Marketing & Sales",
            zh: "营销与销售",
            ja: "マーケティング・営業",
        },
        description: Labels {
            en: "Content marketing, sales automation, and customer engagement",
            zh: "内容营销、销售自动化和客户参与",
            ja: "コンテンツマーケティング、営業自動化、顧客エンゲージメント",
        },
        agents: &["content-marketer", "sales-automator"],
    },
    CuratedCategory {
        id: "support-legal",
        name: Labels {
            en: "Support & Legal",
            zh: "支持与法务",
            ja: "サポート・法務",
        },
        description: Labels {
            en: "Customer support, HR operations, and legal compliance",
            zh: "客户支持、人力资源运营和法律合规",
            ja: "カスタマーサポート、人事運営、法的コンプライアンス",
        },
        agents: &["customer-support", "hr-pro", "legal-advisor"],
    },
    CuratedCategory {
        id: "specialized-domains",
        name: Labels {
            en: "Specialized Domains",
            zh: "专业领域",
            ja: "専門領域",
        },
        description: Labels {
            en: "Blockchain, payments, legacy modernization, and specialized tools",
            zh: "区块链、支付、遗留系统现代化和专业工具",
            ja: "ブロックチェーン、決済、レガシーモダナイゼーション、専門ツール",
        },
        agents: &[
            "blockchain-developer",
            "payment-integration",
            "legacy-modernizer",
            "context-manager",
        ],
    },
    CuratedCategory {
        id: "seo-content",
        name: Labels {
            en: "SEO & Content Optimization",
            zh: "SEO与内容优化",
            ja: "SEO・コンテンツ最適化",
        },
        description: Labels {
            en: "Search engine optimization, content strategy, and digital marketing",
            zh: "搜索引擎优化、内容策略和数字营销",
            ja: "検索エンジン最適化、コンテンツ戦略、デジタルマーケティング",
        },
        agents: &[
            "seo-content-auditor",
            "seo-meta-optimizer",
            "seo-keyword-strategist",
            "seo-structure-architect",
            "seo-snippet-hunter",
            "seo-content-refresher",
            "seo-cannibalization-detector",
            "seo-authority-builder",
            "seo-content-writer",
            "seo-content-planner",
        ],
    },
];
