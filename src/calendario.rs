use chrono::{Datelike, Days, NaiveDate};

use crate::{GeradorError, GeradorResult, RE_CODIGO_MES};

/// Calcula o último dia do mês para o ano e mês fornecidos.
///
/// Parte do dia 28 (existente em qualquer mês) e avança 4 dias, o que garante
/// cair no mês seguinte. Subtraindo o dia do mês da data obtida, volta-se ao
/// último dia do mês original. Anos bissextos são tratados sem tabela de
/// duração de meses.
///
/// Retorna `None` quando (ano, mes) não forma uma data representável.
///
/// ### Exemplo
/// ```
/// use gerador_de_arquivos_sped::ultimo_dia_do_mes;
///
/// assert_eq!(ultimo_dia_do_mes(2024, 2), Some(29)); // ano bissexto
/// assert_eq!(ultimo_dia_do_mes(2023, 2), Some(28));
/// assert_eq!(ultimo_dia_do_mes(2025, 13), None);
/// ```
pub fn ultimo_dia_do_mes(ano: i32, mes: u32) -> Option<u32> {
    let primeiro_dia = NaiveDate::from_ymd_opt(ano, mes, 1)?;

    let proximo_mes = primeiro_dia.with_day(28)?.checked_add_days(Days::new(4))?;
    let ultimo_dia = proximo_mes.checked_sub_days(Days::new(proximo_mes.day() as u64))?;

    Some(ultimo_dia.day())
}

/// Período de apuração (início e fim) no formato AAAAMMDD.
///
/// O início é sempre o dia 01 e o fim é o último dia do mês, de modo que o
/// período cubra o mês civil inteiro.
pub fn periodo_de_apuracao(ano: i32, codigo_mes: &str) -> GeradorResult<(String, String)> {
    let mes = match codigo_mes.parse::<u32>() {
        Ok(mes) if RE_CODIGO_MES.is_match(codigo_mes) => mes,
        _ => {
            return Err(GeradorError::CodigoDeMesInvalido {
                codigo: codigo_mes.to_string(),
            });
        }
    };

    let ultimo_dia = ultimo_dia_do_mes(ano, mes).ok_or_else(|| GeradorError::DataInvalida {
        ano,
        mes: codigo_mes.to_string(),
    })?;

    let data_ini = format!("{ano}{codigo_mes}01");
    let data_fim = format!("{ano}{codigo_mes}{ultimo_dia:02}");

    Ok((data_ini, data_fim))
}

#[cfg(test)]
mod tests {
    use super::{periodo_de_apuracao, ultimo_dia_do_mes};
    use crate::GeradorError;

    #[test]
    fn ultimo_dia_em_meses_de_30_e_31_dias() {
        assert_eq!(ultimo_dia_do_mes(2025, 1), Some(31));
        assert_eq!(ultimo_dia_do_mes(2025, 4), Some(30));
        assert_eq!(ultimo_dia_do_mes(2025, 12), Some(31));
    }

    #[test]
    fn fevereiro_segue_a_regra_do_ano_bissexto() {
        assert_eq!(ultimo_dia_do_mes(2024, 2), Some(29));
        assert_eq!(ultimo_dia_do_mes(2023, 2), Some(28));
        assert_eq!(ultimo_dia_do_mes(2000, 2), Some(29)); // divisível por 400
        assert_eq!(ultimo_dia_do_mes(1900, 2), Some(28)); // divisível por 100, mas não por 400
    }

    #[test]
    fn mes_fora_do_calendario_eh_invalido() {
        assert_eq!(ultimo_dia_do_mes(2025, 0), None);
        assert_eq!(ultimo_dia_do_mes(2025, 13), None);
    }

    #[test]
    fn periodo_de_apuracao_cobre_o_mes_civil_inteiro() {
        assert_eq!(
            periodo_de_apuracao(2025, "07").unwrap(),
            ("20250701".to_string(), "20250731".to_string())
        );
        assert_eq!(
            periodo_de_apuracao(2024, "02").unwrap(),
            ("20240201".to_string(), "20240229".to_string())
        );
        assert_eq!(
            periodo_de_apuracao(2023, "02").unwrap(),
            ("20230201".to_string(), "20230228".to_string())
        );
    }

    #[test]
    fn codigo_de_mes_malformado_eh_rejeitado() {
        for codigo in ["7", "00", "13", "1a", ""] {
            let err = periodo_de_apuracao(2025, codigo).unwrap_err();
            assert!(matches!(err, GeradorError::CodigoDeMesInvalido { .. }));
        }
    }

    #[test]
    fn ano_fora_do_calendario_aborta_com_data_invalida() {
        let err = periodo_de_apuracao(300_000, "01").unwrap_err();
        assert!(matches!(err, GeradorError::DataInvalida { .. }));
    }
}
