use regex::Regex;
use std::sync::LazyLock;

/// Código de mês com exatamente 2 dígitos: de "01" a "12".
pub static RE_CODIGO_MES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])$").unwrap());

/// Campo `{nome_do_campo}` remanescente em um modelo já substituído.
pub static RE_CAMPO_DO_MODELO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-z_]+\}").unwrap());
