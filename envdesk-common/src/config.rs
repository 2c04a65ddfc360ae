use std::fmt;
use std::str::FromStr;

/// 部署环境
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Prod,
    Develop,
}

/// 环境名到后端地址的静态表
pub const ENVIRONMENTS: &[(Environment, &str)] = &[
    (Environment::Prod, "http://127.0.0.1:9998"),
    (Environment::Develop, "http://127.0.0.1:9998"),
];

/// 编译期通过 `ENVDESK_ENV` 选择环境，默认 develop
const SELECTED_ENV: Option<&str> = option_env!("ENVDESK_ENV");

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Prod => "prod",
            Environment::Develop => "develop",
        }
    }

    pub fn base_url(&self) -> &'static str {
        ENVIRONMENTS
            .iter()
            .find(|(env, _)| env == self)
            .map(|(_, url)| *url)
            .unwrap_or("")
    }

    /// 构建时选定的环境；未知名称回落到 develop
    pub fn active() -> Self {
        SELECTED_ENV
            .and_then(|name| name.parse().ok())
            .unwrap_or(Environment::Develop)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "prod" => Ok(Environment::Prod),
            "develop" => Ok(Environment::Develop),
            other => Err(format!("unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 客户端启动配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub env: Environment,
    pub base_url: String,
}

impl ConsoleConfig {
    pub fn active() -> Self {
        Self::for_env(Environment::active())
    }

    pub fn for_env(env: Environment) -> Self {
        Self {
            env,
            base_url: env.base_url().to_string(),
        }
    }
}
