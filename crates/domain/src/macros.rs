/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `new()`: trim + 空チェック + 最大長チェック
/// - `from_optional()`: フォーム入力の `Option<String>` から生成（空なら `None`）
/// - `as_str()`: 文字列参照
///
/// # シークレットモード
///
/// `secret: true` を指定すると `Debug` 出力を `[REDACTED]` にマスクし、
/// `Display` impl を生成しない。API キーやクライアントシークレットが
/// ログに平文で出力されることを防ぐ。
///
/// # 使用例
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use keyprobe_domain::ApiKey;
///
/// let key = ApiKey::new("  sk-test  ")?;
/// assert_eq!(key.as_str(), "sk-test");
/// assert!(format!("{:?}", key).contains("[REDACTED]"));
/// # Ok(())
/// # }
/// ```
macro_rules! define_credential_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr,
            secret: true $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($Name)).field(&"[REDACTED]").finish()
            }
        }

        _credential_string_common!($Name, $label, $max_length);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr,
            max_length: $max_length:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
        $vis struct $Name(String);

        _credential_string_common!($Name, $label, $max_length);
    };
}

/// `define_credential_string!` の両アームで共有されるメソッドを生成する内部マクロ
macro_rules! _credential_string_common {
    ($Name:ident, $label:expr, $max_length:expr) => {
        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                if value.chars().count() > $max_length {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は {} 文字以内である必要があります",
                        $label, $max_length
                    )));
                }

                Ok(Self(value))
            }

            /// 任意フィールドから生成する
            ///
            /// 未指定・空白のみの値は `Ok(None)` になる。
            pub fn from_optional(
                value: Option<String>,
            ) -> Result<Option<Self>, $crate::DomainError> {
                match value {
                    Some(v) if !v.trim().is_empty() => Self::new(v).map(Some),
                    _ => Ok(None),
                }
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}
